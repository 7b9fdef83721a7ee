use chrono::{DateTime, NaiveDate, Utc};
use sqlx::Row;
use sqlx::sqlite::SqlitePool;

use crate::types::{
    DEFAULT_POSITIONS, DailyStats, PositionDistribution, SessionOutcome, StoreError, StoreResult,
};

const DAY_FORMAT: &str = "%Y-%m-%d";

#[derive(Clone, Debug)]
pub struct SqlStore {
    pool: SqlitePool,
}

impl SqlStore {
    pub async fn new(sqlite_connection_string: String) -> StoreResult<Self> {
        let pool = SqlitePool::connect(&sqlite_connection_string).await?;
        sqlx::migrate!("./migrations").run(&pool).await?;
        Ok(Self { pool })
    }

    /// Counters for a day. Days that were never written read as empty.
    pub async fn get_daily_stats(&self, day: NaiveDate) -> StoreResult<DailyStats> {
        let day_str = format_day(day);
        let record = sqlx::query(
            r#"
            SELECT total_interviews, completed_interviews, success_count, last_updated
            FROM daily_stats
            WHERE day = ?
        "#,
        )
        .bind(&day_str)
        .fetch_optional(&self.pool)
        .await?;

        let Some(row) = record else {
            return Ok(DailyStats::empty(day));
        };

        let position_distribution = self.get_position_distribution(&day_str).await?;
        let last_updated: String = row.try_get("last_updated")?;

        Ok(DailyStats {
            day,
            total_interviews: to_count(row.try_get("total_interviews")?)?,
            completed_interviews: to_count(row.try_get("completed_interviews")?)?,
            success_count: to_count(row.try_get("success_count")?)?,
            position_distribution,
            last_updated: Some(
                DateTime::parse_from_rfc3339(&last_updated).map(|dt| dt.with_timezone(&Utc))?,
            ),
        })
    }

    async fn get_position_distribution(&self, day_str: &str) -> StoreResult<PositionDistribution> {
        let records = sqlx::query(
            r#"
            SELECT position, count
            FROM position_counts
            WHERE day = ?
            ORDER BY ordinal
        "#,
        )
        .bind(day_str)
        .fetch_all(&self.pool)
        .await?;

        let mut distribution = PositionDistribution::new();
        for row in records {
            let position: String = row.try_get("position")?;
            let count = to_count(row.try_get("count")?)?;
            distribution.insert(position, Some(count));
        }
        Ok(distribution)
    }

    /// Record a finished session against `day` and return the updated counters.
    pub async fn record_interview(
        &self,
        day: NaiveDate,
        outcome: &SessionOutcome,
        success_threshold: f64,
    ) -> StoreResult<DailyStats> {
        let day_str = format_day(day);
        let now = Utc::now().to_rfc3339();
        let completed: i64 = outcome.interview_complete.into();
        let succeeded: i64 =
            (outcome.interview_complete && outcome.is_success(success_threshold)).into();

        let mut tx = self.pool.begin().await?;

        // Seed the day with the default positions the first time it is written
        let inserted = sqlx::query(
            r#"
            INSERT OR IGNORE INTO daily_stats (day, last_updated)
            VALUES (?, ?)
        "#,
        )
        .bind(&day_str)
        .bind(&now)
        .execute(&mut *tx)
        .await?;
        if inserted.rows_affected() > 0 {
            for (ordinal, position) in DEFAULT_POSITIONS.iter().enumerate() {
                sqlx::query(
                    r#"
                    INSERT INTO position_counts (day, position, count, ordinal)
                    VALUES (?, ?, 0, ?)
                "#,
                )
                .bind(&day_str)
                .bind(*position)
                .bind(ordinal as i64)
                .execute(&mut *tx)
                .await?;
            }
        }

        sqlx::query(
            r#"
            UPDATE daily_stats
            SET total_interviews = total_interviews + 1,
                completed_interviews = completed_interviews + ?,
                success_count = success_count + ?,
                last_updated = ?
            WHERE day = ?
        "#,
        )
        .bind(completed)
        .bind(succeeded)
        .bind(&now)
        .bind(&day_str)
        .execute(&mut *tx)
        .await?;

        if let Some(position) = outcome.position() {
            // New positions are appended after the existing ones
            sqlx::query(
                r#"
                INSERT INTO position_counts (day, position, count, ordinal)
                VALUES (?, ?, 1, (SELECT COALESCE(MAX(ordinal), -1) + 1 FROM position_counts WHERE day = ?))
                ON CONFLICT(day, position) DO UPDATE SET count = count + 1
            "#,
            )
            .bind(&day_str)
            .bind(position)
            .bind(&day_str)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        self.get_daily_stats(day).await
    }

    /// All days with stored counters, oldest first
    pub async fn list_days(&self) -> StoreResult<Vec<NaiveDate>> {
        let records = sqlx::query(
            r#"
            SELECT day
            FROM daily_stats
            ORDER BY day
        "#,
        )
        .fetch_all(&self.pool)
        .await?;

        records
            .into_iter()
            .map(|row| parse_day(&row.try_get::<String, _>("day")?))
            .collect()
    }

    /// Delete every day strictly before `cutoff`. Returns the number of days removed.
    pub async fn remove_days_before(&self, cutoff: NaiveDate) -> StoreResult<u64> {
        let cutoff_str = format_day(cutoff);
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"
            DELETE FROM position_counts
            WHERE day < ?
        "#,
        )
        .bind(&cutoff_str)
        .execute(&mut *tx)
        .await?;

        let removed = sqlx::query(
            r#"
            DELETE FROM daily_stats
            WHERE day < ?
        "#,
        )
        .bind(&cutoff_str)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(removed.rows_affected())
    }
}

pub fn format_day(day: NaiveDate) -> String {
    day.format(DAY_FORMAT).to_string()
}

pub fn parse_day(value: &str) -> StoreResult<NaiveDate> {
    NaiveDate::parse_from_str(value, DAY_FORMAT)
        .map_err(|_| StoreError::InvalidDate(value.to_string()))
}

fn to_count(value: i64) -> StoreResult<u64> {
    u64::try_from(value).map_err(|_| StoreError::InvalidCount(value))
}
