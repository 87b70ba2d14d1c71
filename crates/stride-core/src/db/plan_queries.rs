//! Saved plan CRUD operations and queries.

use std::str::FromStr;

use jiff::Timestamp;
use log::{debug, warn};
use rusqlite::{params, types::Type, OptionalExtension, Row};

use crate::{
    error::{DatabaseResultExt, Result, StrideError},
    models::{PlanDay, PlanSnapshot, SavedPlan, Weekday},
    store::{PlanSink, Submission},
};

const INSERT_PLAN_SQL: &str = "INSERT INTO plans (name, goal, level, session_duration, training_days, created_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6)";
const INSERT_PLAN_DAY_SQL: &str =
    "INSERT INTO plan_days (plan_id, day, day_order, workout_ids) VALUES (?1, ?2, ?3, ?4)";
const SELECT_PLAN_SQL: &str = "SELECT id, name, goal, level, session_duration, training_days, created_at FROM plans WHERE id = ?1";
const SELECT_PLANS_SQL: &str = "SELECT id, name, goal, level, session_duration, training_days, created_at FROM plans ORDER BY id DESC";
const SELECT_PLAN_DAYS_SQL: &str =
    "SELECT day, workout_ids FROM plan_days WHERE plan_id = ?1 ORDER BY day_order";
const DELETE_PLAN_SQL: &str = "DELETE FROM plans WHERE id = ?1";

/// Parses a text column through the type's `FromStr`.
fn parse_column<T>(row: &Row, index: usize) -> rusqlite::Result<T>
where
    T: FromStr<Err = String>,
{
    let value: String = row.get(index)?;
    value
        .parse::<T>()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(index, Type::Text, e.into()))
}

/// Splits a comma-separated column, ignoring empty segments.
fn split_list(value: &str) -> impl Iterator<Item = &str> {
    value.split(',').map(str::trim).filter(|s| !s.is_empty())
}

/// Decodes a JSON string array column. Workout ids are opaque, so they are
/// never split or trimmed.
fn parse_id_list(row: &Row, index: usize) -> rusqlite::Result<Vec<String>> {
    let value: String = row.get(index)?;
    serde_json::from_str(&value)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(index, Type::Text, Box::new(e)))
}

fn join_days(days: &[Weekday]) -> String {
    days.iter().map(Weekday::as_str).collect::<Vec<_>>().join(",")
}

impl super::Database {
    /// Helper function to construct a SavedPlan (without its day schedule)
    /// from a database row
    fn build_plan_from_row(row: &Row) -> rusqlite::Result<SavedPlan> {
        let days_str: String = row.get(5)?;
        let training_days = split_list(&days_str)
            .map(str::parse::<Weekday>)
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| rusqlite::Error::FromSqlConversionFailure(5, Type::Text, e.into()))?;

        Ok(SavedPlan {
            id: row.get::<_, i64>(0)? as u64,
            plan: PlanSnapshot {
                name: row.get(1)?,
                goal: parse_column(row, 2)?,
                level: parse_column(row, 3)?,
                training_days,
                session_duration: parse_column(row, 4)?,
                day_schedule: Vec::new(),
            },
            created_at: row.get::<_, String>(6)?.parse::<Timestamp>().map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(6, Type::Text, Box::new(e))
            })?,
        })
    }

    /// Stores a plan snapshot and its day schedule in one transaction.
    pub fn insert_plan(&mut self, plan: &PlanSnapshot) -> Result<SavedPlan> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let now = Timestamp::now();

        tx.execute(
            INSERT_PLAN_SQL,
            params![
                plan.name,
                plan.goal.as_str(),
                plan.level.as_str(),
                plan.session_duration.as_str(),
                join_days(&plan.training_days),
                now.to_string(),
            ],
        )
        .db_context("Failed to insert plan")?;

        let id = tx.last_insert_rowid();

        for (order, entry) in plan.day_schedule.iter().enumerate() {
            let workout_ids = serde_json::to_string(&entry.workout_ids)?;
            tx.execute(
                INSERT_PLAN_DAY_SQL,
                params![id, entry.day.as_str(), order as i64, workout_ids],
            )
            .db_context("Failed to insert plan day")?;
        }

        tx.commit().db_context("Failed to commit transaction")?;
        debug!("Stored plan {id} with {} day(s)", plan.day_schedule.len());

        Ok(SavedPlan {
            id: id as u64,
            plan: plan.clone(),
            created_at: now,
        })
    }

    /// Retrieves a saved plan, with its day schedule, by ID.
    pub fn get_plan(&self, id: u64) -> Result<Option<SavedPlan>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_PLAN_SQL)
            .db_context("Failed to prepare query")?;

        let mut plan = stmt
            .query_row(params![id as i64], Self::build_plan_from_row)
            .optional()
            .db_context("Failed to query plan")?;

        if let Some(ref mut plan) = plan {
            plan.plan.day_schedule = self.get_plan_days(plan.id)?;
        }

        Ok(plan)
    }

    /// Lists saved plans, newest first, with their day schedules.
    pub fn list_plans(&self) -> Result<Vec<SavedPlan>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_PLANS_SQL)
            .db_context("Failed to prepare query")?;

        let mut plans = stmt
            .query_map([], Self::build_plan_from_row)
            .db_context("Failed to query plans")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch plans")?;

        for plan in &mut plans {
            plan.plan.day_schedule = self.get_plan_days(plan.id)?;
        }

        Ok(plans)
    }

    /// Day schedule of a plan, in stored order.
    fn get_plan_days(&self, plan_id: u64) -> Result<Vec<PlanDay>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_PLAN_DAYS_SQL)
            .db_context("Failed to prepare query")?;

        let days = stmt
            .query_map(params![plan_id as i64], |row| {
                Ok(PlanDay {
                    day: parse_column(row, 0)?,
                    workout_ids: parse_id_list(row, 1)?,
                })
            })
            .db_context("Failed to query plan days")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch plan days")?;

        Ok(days)
    }

    /// Permanently deletes a plan and its day schedule.
    ///
    /// # Errors
    ///
    /// Returns `StrideError::PlanNotFound` if no plan has this ID.
    pub fn delete_plan(&mut self, id: u64) -> Result<()> {
        let deleted = self
            .connection
            .execute(DELETE_PLAN_SQL, params![id as i64])
            .db_context("Failed to delete plan")?;

        if deleted == 0 {
            return Err(StrideError::PlanNotFound { id });
        }
        Ok(())
    }
}

impl PlanSink for super::Database {
    fn submit_plan(&mut self, plan: &PlanSnapshot) -> Submission {
        match self.insert_plan(plan) {
            Ok(saved) => Submission::Accepted { id: saved.id },
            Err(e) => {
                warn!("Failed to store plan: {e}");
                Submission::Rejected {
                    reason: e.to_string(),
                }
            }
        }
    }
}
