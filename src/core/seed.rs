//! Seed routine - Builds the sample company graph and writes it once.
//!
//! Seeding is not idempotent: a second run against the same database hits the unique
//! constraints on the first duplicate manager, SSN or email and commits nothing.

use crate::{
    core::{
        graph::{DepartmentGraph, EmployeeRecord, ManagerGraph},
        persist::{PersistSummary, persist_graph},
    },
    errors::Result,
};
use sea_orm::DatabaseConnection;
use tracing::{error, info, instrument, warn};

/// The three sample departments: HR (101), Testing (102) and DevOps (103).
#[must_use]
pub fn sample_departments() -> Vec<DepartmentGraph> {
    vec![
        DepartmentGraph::new(101, "HR")
            .with_employee(EmployeeRecord::new(
                "Popa",
                "Ion",
                "1890812283456",
                "popa.ion@gmail.com",
            ))
            .with_employee(EmployeeRecord::new(
                "Cirstea",
                "Mara",
                "2021805453216",
                "maria.cirstea@gmail.com",
            ))
            .with_manager(
                ManagerGraph::new(100, "Chivu", "Sorina")
                    .with_budget("Hiring", 20_000)
                    .with_budget("Investments", 40_000)
                    .with_budget("Vacations", 10_000),
            ),
        DepartmentGraph::new(102, "Testing")
            .with_employee(EmployeeRecord::new(
                "Dinu",
                "Cristian",
                "1910610455632",
                "dinu.cristian@gmail.com",
            ))
            .with_manager(
                ManagerGraph::new(200, "Pruna", "Ioana")
                    .with_budget("Vacations", 10_000)
                    .with_budget("Hiring", 10_000)
                    .with_budget("Investments", 43_000),
            ),
        DepartmentGraph::new(103, "DevOps")
            .with_employee(EmployeeRecord::new(
                "Vasile",
                "Georgiana",
                "2880721822217",
                "georgiana.vasile@gmail.com",
            ))
            .with_manager(
                ManagerGraph::new(300, "Streche", "Bogdan")
                    .with_budget("Investments", 50_000)
                    .with_budget("Hiring", 20_000)
                    .with_budget("Vacations", 7_000),
            ),
    ]
}

/// Persists `departments` as one batch.
#[instrument(skip(db, departments))]
pub async fn seed(
    db: &DatabaseConnection,
    departments: &[DepartmentGraph],
) -> Result<PersistSummary> {
    let summary = persist_graph(db, departments).await?;
    info!(
        departments = summary.departments,
        managers = summary.managers,
        employees = summary.employees,
        budget_lines = summary.budget_lines,
        "Seed data committed."
    );
    Ok(summary)
}

/// Seeds once and then closes the connection, whether or not seeding succeeded.
///
/// A close failure is returned only when the seed itself went through; otherwise the
/// seed error wins and the close failure is logged.
pub async fn run_once(
    db: DatabaseConnection,
    departments: &[DepartmentGraph],
) -> Result<PersistSummary> {
    let outcome = seed(&db, departments).await;

    match (outcome, db.close().await) {
        (Ok(summary), Ok(())) => {
            info!("Database connection closed.");
            Ok(summary)
        }
        (Ok(_), Err(close_err)) => {
            error!("Failed to close database connection: {}", close_err);
            Err(close_err.into())
        }
        (Err(seed_err), close_result) => {
            if let Err(close_err) = close_result {
                warn!("Failed to close database connection after seed error: {}", close_err);
            }
            Err(seed_err)
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::core::report::department_summary;
    use crate::entities::{Budgets, Department, Employee, Manager};
    use crate::errors::Error;
    use crate::test_utils::*;
    use sea_orm::{ConnAcquireErr, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait};
    use std::collections::{BTreeMap, HashSet};

    /// Queries through a clone of a connection handed to `run_once`; the shared pool
    /// must already be closed.
    async fn assert_connection_closed(handle: &DatabaseConnection) {
        let result = Manager::find().all(handle).await;
        assert!(matches!(
            result,
            Err(DbErr::ConnectionAcquire(ConnAcquireErr::ConnectionClosed))
        ));
    }

    #[test]
    fn test_sample_data_shape() {
        let departments = sample_departments();

        let names: Vec<(i32, &str)> = departments
            .iter()
            .map(|d| (d.id, d.name.as_str()))
            .collect();
        assert_eq!(names, [(101, "HR"), (102, "Testing"), (103, "DevOps")]);

        let employees: Vec<usize> = departments.iter().map(|d| d.employees.len()).collect();
        assert_eq!(employees, [2, 1, 1]);

        // Identifiers that must be unique are unique within the sample itself
        let ssns: HashSet<&str> = departments
            .iter()
            .flat_map(|d| d.employees.iter().map(|e| e.ssn.as_str()))
            .collect();
        let emails: HashSet<&str> = departments
            .iter()
            .flat_map(|d| d.employees.iter().map(|e| e.email.as_str()))
            .collect();
        assert_eq!(ssns.len(), 4);
        assert_eq!(emails.len(), 4);
        assert!(ssns.iter().all(|ssn| ssn.len() <= 13));
        assert!(emails.iter().all(|email| email.len() <= 30));
    }

    #[tokio::test]
    async fn test_seed_writes_hr_department() -> Result<()> {
        let db = setup_test_db().await?;
        seed(&db, &sample_departments()).await?;

        let summary = department_summary(&db, 101).await?;
        assert_eq!(summary.department.department_name, "HR");

        let manager = summary.manager.unwrap();
        assert_eq!(manager.manager_id, 100);
        assert_eq!(manager.last_name, "Chivu");
        assert_eq!(manager.first_name, "Sorina");

        let budget: BTreeMap<&str, Option<i32>> = summary
            .budget
            .iter()
            .map(|line| (line.resources.as_str(), line.money))
            .collect();
        assert_eq!(
            budget,
            BTreeMap::from([
                ("Hiring", Some(20_000)),
                ("Investments", Some(40_000)),
                ("Vacations", Some(10_000)),
            ])
        );
        assert_eq!(summary.total_budget, 70_000);

        let last_names: Vec<&str> = summary
            .employees
            .iter()
            .map(|e| e.last_name.as_str())
            .collect();
        assert_eq!(last_names, ["Popa", "Cirstea"]);
        Ok(())
    }

    #[tokio::test]
    async fn test_seed_writes_every_table() -> Result<()> {
        let db = setup_test_db().await?;
        let summary = seed(&db, &sample_departments()).await?;

        assert_eq!(summary.departments, 3);
        assert_eq!(summary.managers, 3);
        assert_eq!(summary.employees, 4);
        assert_eq!(summary.budget_lines, 9);

        assert_eq!(Department::find().count(&db).await?, 3);
        assert_eq!(Manager::find().count(&db).await?, 3);
        assert_eq!(Employee::find().count(&db).await?, 4);
        assert_eq!(Budgets::find().count(&db).await?, 9);

        let devops = department_summary(&db, 103).await?;
        assert_eq!(devops.total_budget, 77_000);
        Ok(())
    }

    #[tokio::test]
    async fn test_second_seed_fails_without_new_rows() -> Result<()> {
        let db = setup_test_db().await?;
        seed(&db, &sample_departments()).await?;

        let err = seed(&db, &sample_departments()).await.unwrap_err();

        assert!(matches!(err, Error::UniqueViolation { .. }));
        assert_eq!(Department::find().count(&db).await?, 3);
        assert_eq!(Manager::find().count(&db).await?, 3);
        assert_eq!(Employee::find().count(&db).await?, 4);
        assert_eq!(Budgets::find().count(&db).await?, 9);
        Ok(())
    }

    #[tokio::test]
    async fn test_seed_into_fresh_databases_twice() -> Result<()> {
        for _ in 0..2 {
            let db = setup_test_db().await?;
            let handle = db.clone();

            let summary = run_once(db, &sample_departments()).await?;

            assert_eq!(summary.departments, 3);
            assert_connection_closed(&handle).await;
        }
        Ok(())
    }

    #[tokio::test]
    async fn test_run_once_closes_connection_on_failure() -> Result<()> {
        // No tables: the first insert fails
        let db = sea_orm::Database::connect("sqlite::memory:").await?;
        let handle = db.clone();

        let result = run_once(db, &sample_departments()).await;

        assert!(matches!(result, Err(Error::Database(_))));
        assert_connection_closed(&handle).await;
        Ok(())
    }
}
