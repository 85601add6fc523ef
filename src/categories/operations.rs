use anyhow::Result;
use bigdecimal::BigDecimal;
use diesel::prelude::*;

use crate::categories::db_types::{CategoryChangeset, CategoryRecord, CreateCategory};
use crate::categories::processor_enums::{AddCategoryInputArgs, UpdateCategoryInputArgs};
use crate::utils::commons::DbConn;
use crate::utils::errors::TrackerError;

pub fn validate_budget(budget: Option<&BigDecimal>) -> Result<(), TrackerError> {
    match budget {
        Some(value) if value < &BigDecimal::from(0) => Err(TrackerError::validation(
            "monthly_budget cannot be negative",
        )),
        _ => Ok(()),
    }
}

/// Default names not yet present, in seed order.
pub fn missing_defaults(defaults: &[String], existing: &[String]) -> Vec<String> {
    defaults
        .iter()
        .filter(|name| !existing.contains(name))
        .cloned()
        .collect()
}

pub fn list_categories(conn: DbConn, owner: i32) -> Result<Vec<CategoryRecord>> {
    use crate::schema::categories::dsl::*;

    let res = categories
        .filter(user_id.eq(owner))
        .order(id.asc())
        .get_results::<CategoryRecord>(conn)?;

    Ok(res)
}

pub fn find_category(conn: DbConn, category_id: i32) -> Result<Option<CategoryRecord>> {
    use crate::schema::categories::dsl::*;

    let res = categories
        .filter(id.eq(category_id))
        .first::<CategoryRecord>(conn)
        .optional()?;

    Ok(res)
}

/// Fails unless the category exists and is owned by `owner`.
pub fn get_owned_category(conn: DbConn, owner: i32, category_id: i32) -> Result<CategoryRecord> {
    match find_category(conn, category_id)? {
        Some(category) if category.user_id == owner => Ok(category),
        _ => Err(TrackerError::validation(format!(
            "Category {} does not exist for user {}",
            category_id, owner
        ))
        .into()),
    }
}

/// True when another of the owner's categories already uses `wanted`.
pub fn name_conflicts(siblings: &[CategoryRecord], wanted: &str, excluding: Option<i32>) -> bool {
    siblings
        .iter()
        .any(|c| c.name == wanted && Some(c.id) != excluding)
}

fn clean_name(raw: &str) -> Result<String, TrackerError> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(TrackerError::validation("name cannot be empty"));
    }
    Ok(name.to_string())
}

/// Row to insert for a user-created category, checked against the owner's existing ones.
pub fn plan_new_category(
    args: &AddCategoryInputArgs,
    siblings: &[CategoryRecord],
) -> Result<CreateCategory, TrackerError> {
    let name = clean_name(&args.name)?;
    validate_budget(args.monthly_budget.as_ref())?;

    if name_conflicts(siblings, &name, None) {
        return Err(TrackerError::validation("Category already exists"));
    }

    Ok(CreateCategory {
        user_id: args.user_id,
        name,
        is_default: false,
        monthly_budget: args.monthly_budget.clone(),
    })
}

/// Columns an update actually changes. Renames of default categories are dropped.
pub fn plan_category_update(
    existing: &CategoryRecord,
    args: &UpdateCategoryInputArgs,
    siblings: &[CategoryRecord],
) -> Result<CategoryChangeset, TrackerError> {
    let mut changes = CategoryChangeset::default();

    if let Some(requested) = &args.name {
        if existing.is_default {
            tracing::debug!(category_id = existing.id, "ignoring rename of default category");
        } else {
            let new_name = clean_name(requested)?;
            if new_name != existing.name {
                if name_conflicts(siblings, &new_name, Some(existing.id)) {
                    return Err(TrackerError::validation("Category already exists"));
                }
                changes.name = Some(new_name);
            }
        }
    }

    if let Some(budget) = &args.monthly_budget {
        validate_budget(budget.as_ref())?;
        changes.monthly_budget = Some(budget.clone());
    }

    Ok(changes)
}

pub fn check_deletable(category: &CategoryRecord, expense_count: i64) -> Result<(), TrackerError> {
    if category.is_default {
        return Err(TrackerError::validation("Cannot delete default categories"));
    }

    if expense_count > 0 {
        return Err(TrackerError::validation(format!(
            "Cannot delete a category that still has {} expenses",
            expense_count
        )));
    }

    Ok(())
}

pub fn add_category(conn: DbConn, args: &AddCategoryInputArgs) -> Result<CategoryRecord> {
    use crate::schema::categories::table as CategoriesTable;

    let siblings = list_categories(conn, args.user_id)?;
    let row = plan_new_category(args, &siblings)?;

    let res = diesel::insert_into(CategoriesTable)
        .values(&row)
        .get_result::<CategoryRecord>(conn)?;

    tracing::info!(category_id = res.id, user_id = res.user_id, "category created");

    Ok(res)
}

pub fn update_category(conn: DbConn, args: &UpdateCategoryInputArgs) -> Result<CategoryRecord> {
    use crate::schema::categories::dsl::*;

    let existing = find_category(conn, args.category_id)?
        .ok_or_else(|| TrackerError::not_found("Category"))?;

    let siblings = list_categories(conn, existing.user_id)?;
    let changes = plan_category_update(&existing, args, &siblings)?;

    if changes.is_empty() {
        return Ok(existing);
    }

    let res = diesel::update(categories.filter(id.eq(existing.id)))
        .set(&changes)
        .get_result::<CategoryRecord>(conn)?;

    Ok(res)
}

pub fn delete_category(conn: DbConn, category_id: i32) -> Result<()> {
    use crate::schema::categories::dsl as cat_dsl;
    use crate::schema::expenses::dsl as exp_dsl;

    let existing = find_category(conn, category_id)?
        .ok_or_else(|| TrackerError::not_found("Category"))?;

    let expense_count = exp_dsl::expenses
        .filter(exp_dsl::category_id.eq(existing.id))
        .count()
        .get_result::<i64>(conn)?;

    check_deletable(&existing, expense_count)?;

    diesel::delete(cat_dsl::categories.filter(cat_dsl::id.eq(existing.id))).execute(conn)?;

    tracing::info!(category_id = existing.id, "category deleted");

    Ok(())
}

/// Seeds whichever defaults the user is missing. Safe to call repeatedly.
pub fn initialize_defaults(conn: DbConn, owner: i32, defaults: &[String]) -> Result<Vec<String>> {
    use crate::schema::categories::dsl::*;

    let existing = categories
        .filter(user_id.eq(owner))
        .select(name)
        .get_results::<String>(conn)?;

    let rows: Vec<CreateCategory> = missing_defaults(defaults, &existing)
        .into_iter()
        .map(|default_name| CreateCategory {
            user_id: owner,
            name: default_name,
            is_default: true,
            monthly_budget: None,
        })
        .collect();

    if rows.is_empty() {
        return Ok(Vec::new());
    }

    let created = diesel::insert_into(categories)
        .values(&rows)
        .on_conflict_do_nothing()
        .returning(name)
        .get_results::<String>(conn)?;

    tracing::info!(user_id = owner, created = created.len(), "seeded default categories");

    Ok(created)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::categories::config::{CategoriesConfig, DEFAULT_CATEGORIES};
    use std::str::FromStr;

    #[test]
    fn test_default_seed_set() {
        let config = CategoriesConfig::default();
        assert_eq!(config.default_categories.len(), 8);
        assert_eq!(config.default_categories[0], "Groceries");
        assert_eq!(config.default_categories[7], "Other");
        assert!(config.default_categories.contains(&"Food & Dining".to_string()));
    }

    #[test]
    fn test_missing_defaults_for_new_user() {
        let config = CategoriesConfig::default();
        let missing = missing_defaults(&config.default_categories, &[]);
        assert_eq!(missing, DEFAULT_CATEGORIES.map(String::from).to_vec());
    }

    #[test]
    fn test_missing_defaults_is_idempotent() {
        let config = CategoriesConfig::default();
        let all = config.default_categories.clone();
        assert!(missing_defaults(&config.default_categories, &all).is_empty());
    }

    #[test]
    fn test_missing_defaults_skips_existing_and_custom() {
        let config = CategoriesConfig::default();
        let existing = vec!["Health".to_string(), "Pets".to_string()];
        let missing = missing_defaults(&config.default_categories, &existing);
        assert_eq!(missing.len(), 7);
        assert!(!missing.contains(&"Health".to_string()));
        assert!(!missing.contains(&"Pets".to_string()));
    }

    fn record(id: i32, name: &str, is_default: bool) -> CategoryRecord {
        CategoryRecord {
            id,
            user_id: 7,
            name: name.to_string(),
            is_default,
            monthly_budget: None,
        }
    }

    fn siblings() -> Vec<CategoryRecord> {
        vec![record(1, "Groceries", true), record(2, "Pets", false), record(3, "Travel", false)]
    }

    fn rename(category_id: i32, name: &str) -> UpdateCategoryInputArgs {
        UpdateCategoryInputArgs {
            category_id,
            name: Some(name.to_string()),
            monthly_budget: None,
        }
    }

    #[test]
    fn test_new_category_rejects_duplicate_name() {
        let args = AddCategoryInputArgs {
            user_id: 7,
            name: " Pets ".to_string(),
            monthly_budget: None,
        };
        assert_eq!(
            plan_new_category(&args, &siblings()),
            Err(TrackerError::validation("Category already exists"))
        );
    }

    #[test]
    fn test_new_category_is_never_default() {
        let args = AddCategoryInputArgs {
            user_id: 7,
            name: "  Books ".to_string(),
            monthly_budget: Some(BigDecimal::from(40)),
        };
        let row = plan_new_category(&args, &siblings()).unwrap();
        assert_eq!(row.name, "Books");
        assert!(!row.is_default);
        assert_eq!(row.monthly_budget, Some(BigDecimal::from(40)));

        let blank = AddCategoryInputArgs { name: "   ".to_string(), ..args };
        assert!(plan_new_category(&blank, &siblings()).is_err());
    }

    #[test]
    fn test_rename_of_default_category_is_ignored() {
        let existing = record(1, "Groceries", true);
        let args = UpdateCategoryInputArgs {
            monthly_budget: Some(Some(BigDecimal::from(300))),
            ..rename(1, "Food")
        };

        let changes = plan_category_update(&existing, &args, &siblings()).unwrap();
        assert_eq!(changes.name, None);
        assert_eq!(changes.monthly_budget, Some(Some(BigDecimal::from(300))));

        let only_rename = plan_category_update(&existing, &rename(1, "Food"), &siblings()).unwrap();
        assert!(only_rename.is_empty());
    }

    #[test]
    fn test_rename_rejects_taken_name() {
        let existing = record(2, "Pets", false);
        assert_eq!(
            plan_category_update(&existing, &rename(2, "Travel"), &siblings()),
            Err(TrackerError::validation("Category already exists"))
        );
    }

    #[test]
    fn test_rename_to_own_name_or_new_name() {
        let existing = record(2, "Pets", false);
        assert!(plan_category_update(&existing, &rename(2, "Pets"), &siblings())
            .unwrap()
            .is_empty());

        let changes = plan_category_update(&existing, &rename(2, "Animals"), &siblings()).unwrap();
        assert_eq!(changes.name, Some("Animals".to_string()));
    }

    #[test]
    fn test_budget_can_be_cleared() {
        let existing = record(2, "Pets", false);
        let args = UpdateCategoryInputArgs {
            category_id: 2,
            name: None,
            monthly_budget: Some(None),
        };
        let changes = plan_category_update(&existing, &args, &siblings()).unwrap();
        assert_eq!(changes.monthly_budget, Some(None));

        let negative = UpdateCategoryInputArgs {
            monthly_budget: Some(Some(BigDecimal::from(-1))),
            ..args
        };
        assert!(plan_category_update(&existing, &negative, &siblings()).is_err());
    }

    #[test]
    fn test_default_category_cannot_be_deleted() {
        assert_eq!(
            check_deletable(&record(1, "Groceries", true), 0),
            Err(TrackerError::validation("Cannot delete default categories"))
        );
    }

    #[test]
    fn test_category_with_expenses_cannot_be_deleted() {
        let err = check_deletable(&record(2, "Pets", false), 3).unwrap_err();
        assert_eq!(
            err,
            TrackerError::validation("Cannot delete a category that still has 3 expenses")
        );
        assert!(check_deletable(&record(2, "Pets", false), 0).is_ok());
    }

    #[test]
    fn test_validate_budget() {
        assert!(validate_budget(None).is_ok());
        assert!(validate_budget(Some(&BigDecimal::from(0))).is_ok());
        assert!(validate_budget(Some(&BigDecimal::from_str("199.99").unwrap())).is_ok());
        assert_eq!(
            validate_budget(Some(&BigDecimal::from(-5))),
            Err(TrackerError::validation("monthly_budget cannot be negative"))
        );
    }
}
