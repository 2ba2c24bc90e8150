//! Budget line data access.

use crate::{
    core::graph::BudgetLine,
    entities::{Budgets, budget},
    errors::Result,
};
use sea_orm::{QueryOrder, Set, prelude::*};

/// Inserts one budget line for `manager_id`.
///
/// The composite key rejects a second line for the same resource category.
pub async fn insert_budget_line<C>(
    db: &C,
    manager_id: i32,
    line: &BudgetLine,
) -> Result<budget::Model>
where
    C: ConnectionTrait,
{
    let budget_line = budget::ActiveModel {
        manager_id: Set(manager_id),
        resources: Set(line.resources.clone()),
        money: Set(line.money),
    };

    budget_line.insert(db).await.map_err(Into::into)
}

/// Lists a manager's budget lines ordered by resource category.
pub async fn get_budget_for_manager<C>(db: &C, manager_id: i32) -> Result<Vec<budget::Model>>
where
    C: ConnectionTrait,
{
    Budgets::find()
        .filter(budget::Column::ManagerId.eq(manager_id))
        .order_by_asc(budget::Column::Resources)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Sums the allocated amounts, ignoring lines without one.
#[must_use]
pub fn total_money(lines: &[budget::Model]) -> i64 {
    lines
        .iter()
        .filter_map(|line| line.money)
        .map(i64::from)
        .sum()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::errors::Error;
    use crate::test_utils::*;

    #[tokio::test]
    async fn test_budget_lines_ordered_by_resource() -> Result<()> {
        let db = setup_test_db().await?;
        create_test_manager(&db, 100).await?;

        for (resources, money) in [("Vacations", 10_000), ("Hiring", 20_000)] {
            let line = BudgetLine {
                resources: resources.to_string(),
                money: Some(money),
            };
            insert_budget_line(&db, 100, &line).await?;
        }

        let lines = get_budget_for_manager(&db, 100).await?;
        let resources: Vec<&str> = lines.iter().map(|l| l.resources.as_str()).collect();
        assert_eq!(resources, ["Hiring", "Vacations"]);
        assert_eq!(total_money(&lines), 30_000);
        Ok(())
    }

    #[tokio::test]
    async fn test_duplicate_resource_for_manager_is_rejected() -> Result<()> {
        let db = setup_test_db().await?;
        create_test_manager(&db, 100).await?;

        let line = BudgetLine {
            resources: "Hiring".to_string(),
            money: Some(1),
        };
        insert_budget_line(&db, 100, &line).await?;
        let err = insert_budget_line(&db, 100, &line).await.unwrap_err();

        assert!(matches!(err, Error::UniqueViolation { .. }));
        Ok(())
    }

    #[tokio::test]
    async fn test_same_resource_for_different_managers() -> Result<()> {
        let db = setup_test_db().await?;
        create_test_manager(&db, 100).await?;
        create_test_manager(&db, 200).await?;

        let line = BudgetLine {
            resources: "Hiring".to_string(),
            money: None,
        };
        insert_budget_line(&db, 100, &line).await?;
        insert_budget_line(&db, 200, &line).await?;

        let lines = get_budget_for_manager(&db, 200).await?;
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].money, None);
        assert_eq!(total_money(&lines), 0);
        Ok(())
    }

    #[tokio::test]
    async fn test_budget_requires_existing_manager() -> Result<()> {
        let db = setup_test_db().await?;

        let line = BudgetLine {
            resources: "Hiring".to_string(),
            money: Some(5),
        };
        let err = insert_budget_line(&db, 404, &line).await.unwrap_err();

        assert!(matches!(err, Error::ForeignKeyViolation { .. }));
        Ok(())
    }
}
