use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::db::queries::{
    count_sessions_for_class, delete_class, find_class, insert_class, load_classes,
};
use crate::errors::{AppError, AppResult};
use crate::models::gym_class::GymClass;

pub struct ClassLogic;

impl ClassLogic {
    pub fn add(pool: &mut DbPool, name: &str) -> AppResult<GymClass> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::Other("class name cannot be empty".into()));
        }

        let id = insert_class(&pool.conn, name)?;
        ttlog_quiet(&pool.conn, "add", &format!("class #{id}"), name);

        Ok(GymClass {
            id,
            name: name.to_string(),
        })
    }

    pub fn list(pool: &mut DbPool) -> AppResult<Vec<GymClass>> {
        load_classes(&pool.conn)
    }

    /// Delete a class. Refused while sessions still reference it.
    pub fn delete(pool: &mut DbPool, id: i64) -> AppResult<GymClass> {
        let class = find_class(&pool.conn, id)?.ok_or(AppError::ClassNotFound(id))?;

        let used = count_sessions_for_class(&pool.conn, id)?;
        if used > 0 {
            return Err(AppError::ClassInUse(id, used));
        }

        delete_class(&pool.conn, id)?;
        ttlog_quiet(&pool.conn, "del", &format!("class #{id}"), &class.name);

        Ok(class)
    }
}
