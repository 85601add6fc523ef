use anyhow::{anyhow, Result};
use colored::Colorize;
use std::io::Write;

use expense_tracker::action_router::{ActionRouterInput, ActionRouterOutput};
use expense_tracker::categories::processor_enums::{
    AddCategoryInputArgs, CategoriesProcessorInput, CategoriesProcessorOutput,
    UpdateCategoryInputArgs,
};
use expense_tracker::cli_helper::{call_action_router, execute_with_retry, initialize_app_config};
use expense_tracker::cli_utils::{
    confirm,
    formatting::{format_bool, format_budget, format_money, format_percentage, print_header},
    format_record, format_table,
    input::Input,
    menu::{Menu, Section},
    print_info, print_success, print_warning,
};
use expense_tracker::expenses::db_types::CreateExpense;
use expense_tracker::expenses::processor_enums::{
    ExpensesProcessorInput, ExpensesProcessorOutput, UpdateExpenseInputArgs,
};
use expense_tracker::reports::processor_enums::{
    CategoryTotalsInputArgs, MonthlySummaryInputArgs, ReportsProcessorInput,
    ReportsProcessorOutput,
};
use expense_tracker::users::processor_enums::{
    GetUserInputArgs, RegisterUserInputArgs, UsersProcessorInput, UsersProcessorOutput,
};
use expense_tracker::utils::app_config::AppConfig;

#[tokio::main]
async fn main() -> Result<()> {
    eprintln!("{}", "╔═══════════════════════════════════════════════════════╗".bright_cyan());
    eprintln!("{}", "║         Expense Tracker Management CLI                ║".bright_cyan());
    eprintln!("{}", "╚═══════════════════════════════════════════════════════╝".bright_cyan());
    eprintln!();

    eprint!("Initializing app config... ");
    std::io::stderr().flush().ok();

    let app_config = match initialize_app_config() {
        Ok(config) => {
            eprintln!("{}", "✓ Ready".green());
            config
        }
        Err(e) => {
            eprintln!("{}", "✗ Failed".red());
            eprintln!("Error: {}", e);
            return Err(e);
        }
    };

    eprintln!();

    loop {
        let outcome = match Section::select()? {
            Section::Users => users_menu(&app_config).await,
            Section::Categories => categories_menu(&app_config).await,
            Section::Expenses => expenses_menu(&app_config).await,
            Section::Reports => reports_menu(&app_config).await,
            Section::Quit => {
                eprintln!("{}", "Goodbye!".bright_cyan());
                break;
            }
        };

        if let Err(e) = outcome {
            eprintln!("{}", format!("Error: {}", e).red());
        }

        eprintln!();
    }

    Ok(())
}

fn unexpected() -> anyhow::Error {
    anyhow!("Unexpected output type")
}

async fn users_menu(app_config: &AppConfig) -> Result<()> {
    match Menu::new("Users").items(&["Register user", "Look up user", "Back"]).interact()? {
        0 => {
            print_header("Register User");
            let firebase_uid = Input::get_string("Firebase uid")?;
            let email = Input::get_string("Email")?;
            let name = Input::get_optional_string("Name")?;

            execute_with_retry(
                || async {
                    let input = ActionRouterInput::Users(UsersProcessorInput::Register(
                        RegisterUserInputArgs {
                            firebase_uid: firebase_uid.clone(),
                            email: email.clone(),
                            name: name.clone(),
                        },
                    ));

                    match call_action_router(input, app_config.clone()).await? {
                        ActionRouterOutput::Users(UsersProcessorOutput::Register(output)) => {
                            if output.created {
                                print_success(&format!("Registered user {}", output.user.id));
                            } else {
                                print_info(&format!("User already registered as {}", output.user.id));
                            }
                            Ok(())
                        }
                        _ => Err(unexpected()),
                    }
                },
                "register_user",
            )
            .await
        }
        1 => {
            print_header("Look Up User");
            let lookup = match Input::select_from_list("Look up by", &["Firebase uid", "User id"])? {
                1 => GetUserInputArgs::ById(Input::get_id("User id")?),
                _ => GetUserInputArgs::ByFirebaseUid(Input::get_string("Firebase uid")?),
            };
            let input = ActionRouterInput::Users(UsersProcessorInput::GetUser(lookup));

            match call_action_router(input, app_config.clone()).await? {
                ActionRouterOutput::Users(UsersProcessorOutput::GetUser(user)) => {
                    format_record(vec![
                        ("id", user.id.to_string()),
                        ("firebase_uid", user.firebase_uid),
                        ("email", user.email),
                        ("name", user.name),
                        ("created_at", user.created_at.format("%Y-%m-%d %H:%M:%S").to_string()),
                    ]);
                    Ok(())
                }
                _ => Err(unexpected()),
            }
        }
        _ => Ok(()),
    }
}

async fn categories_menu(app_config: &AppConfig) -> Result<()> {
    let choice = Menu::new("Categories")
        .items(&[
            "List categories",
            "Add category",
            "Update category",
            "Delete category",
            "Seed default categories",
            "Back",
        ])
        .interact()?;

    let input = match choice {
        0 => CategoriesProcessorInput::GetCategories(Input::get_id("User id")?),
        1 => {
            print_header("Add Category");
            CategoriesProcessorInput::AddCategory(AddCategoryInputArgs {
                user_id: Input::get_id("User id")?,
                name: Input::get_string("Name")?,
                monthly_budget: Input::get_optional_decimal("Monthly budget")?,
            })
        }
        2 => {
            print_header("Update Category");
            let category_id = Input::get_id("Category id")?;
            let name = Input::get_optional_string("New name")?;
            let monthly_budget = match Input::select_from_list(
                "Monthly budget",
                &["Keep current", "Set new budget", "Clear budget"],
            )? {
                1 => Some(Some(Input::get_decimal("New budget")?)),
                2 => Some(None),
                _ => None,
            };
            CategoriesProcessorInput::UpdateCategory(UpdateCategoryInputArgs {
                category_id,
                name,
                monthly_budget,
            })
        }
        3 => {
            let category_id = Input::get_id("Category id")?;
            if !confirm(&format!("Delete category {}?", category_id))? {
                print_info("Cancelled");
                return Ok(());
            }
            CategoriesProcessorInput::DeleteCategory(category_id)
        }
        4 => CategoriesProcessorInput::InitializeDefaults(Input::get_id("User id")?),
        _ => return Ok(()),
    };

    match call_action_router(ActionRouterInput::Categories(input), app_config.clone()).await? {
        ActionRouterOutput::Categories(output) => {
            match output {
                CategoriesProcessorOutput::GetCategories(categories) => {
                    let rows = categories
                        .iter()
                        .map(|c| {
                            vec![
                                c.id.to_string(),
                                c.name.clone(),
                                format_bool(c.is_default),
                                format_budget(c.monthly_budget.as_ref()),
                            ]
                        })
                        .collect();
                    format_table(vec!["ID", "Name", "Default", "Budget"], rows);
                }
                CategoriesProcessorOutput::AddCategory(category) => {
                    print_success(&format!("Created category {} ({})", category.name, category.id));
                }
                CategoriesProcessorOutput::UpdateCategory(category) => {
                    print_success(&format!("Updated category {}", category.id));
                }
                CategoriesProcessorOutput::DeleteCategory => {
                    print_success("Category deleted successfully");
                }
                CategoriesProcessorOutput::InitializeDefaults(created) => {
                    if created.is_empty() {
                        print_info("All default categories already exist");
                    } else {
                        print_success(&format!("Created {} default categories", created.len()));
                    }
                }
            }
            Ok(())
        }
        _ => Err(unexpected()),
    }
}

async fn expenses_menu(app_config: &AppConfig) -> Result<()> {
    let choice = Menu::new("Expenses")
        .items(&["List expenses", "Add expense", "Update expense", "Delete expense", "Back"])
        .interact()?;

    let input = match choice {
        0 => ExpensesProcessorInput::GetExpenses(Input::get_id("User id")?),
        1 => {
            print_header("Add Expense");
            ExpensesProcessorInput::AddExpense(CreateExpense {
                user_id: Input::get_id("User id")?,
                category_id: Input::get_id("Category id")?,
                amount: Input::get_decimal("Amount")?,
                description: Input::get_optional_string("Description")?.unwrap_or_default(),
                date: Input::get_date("Date")?,
            })
        }
        2 => {
            print_header("Update Expense");
            print_info("Leave a field empty to keep its current value");
            ExpensesProcessorInput::UpdateExpense(UpdateExpenseInputArgs {
                expense_id: Input::get_id("Expense id")?,
                category_id: Input::get_optional_id("Category id")?,
                amount: Input::get_optional_decimal("Amount")?,
                description: Input::get_optional_string("Description")?,
                date: Input::get_optional_date("Date")?,
            })
        }
        3 => {
            let expense_id = Input::get_id("Expense id")?;
            if !confirm(&format!("Delete expense {}?", expense_id))? {
                print_info("Cancelled");
                return Ok(());
            }
            ExpensesProcessorInput::DeleteExpense(expense_id)
        }
        _ => return Ok(()),
    };

    match call_action_router(ActionRouterInput::Expenses(input), app_config.clone()).await? {
        ActionRouterOutput::Expenses(output) => {
            match output {
                ExpensesProcessorOutput::GetExpenses(expenses) => {
                    if expenses.is_empty() {
                        print_warning("No expenses recorded");
                    }
                    let rows = expenses
                        .iter()
                        .map(|e| {
                            vec![
                                e.id.to_string(),
                                e.date.to_string(),
                                e.category_id.to_string(),
                                format_money(&e.amount),
                                e.description.clone(),
                            ]
                        })
                        .collect();
                    format_table(vec!["ID", "Date", "Category", "Amount", "Description"], rows);
                }
                ExpensesProcessorOutput::AddExpense(expense) => {
                    print_success(&format!("Recorded expense {}", expense.id));
                }
                ExpensesProcessorOutput::UpdateExpense(expense) => {
                    print_success(&format!("Updated expense {}", expense.id));
                }
                ExpensesProcessorOutput::DeleteExpense => {
                    print_success("Expense deleted successfully");
                }
            }
            Ok(())
        }
        _ => Err(unexpected()),
    }
}

async fn reports_menu(app_config: &AppConfig) -> Result<()> {
    let choice = Menu::new("Reports")
        .items(&["Category spending by month", "Monthly budget summary", "Back"])
        .interact()?;

    let input = match choice {
        0 => ReportsProcessorInput::CategoryTotals(CategoryTotalsInputArgs {
            user_id: Input::get_id("User id")?,
            category_id: Input::get_id("Category id")?,
        }),
        1 => {
            let user_id = Input::get_id("User id")?;
            let month = Input::get_date("Any day in the month")?;
            ReportsProcessorInput::MonthlySummary(MonthlySummaryInputArgs {
                user_id,
                year: chrono::Datelike::year(&month),
                month: chrono::Datelike::month(&month),
            })
        }
        _ => return Ok(()),
    };

    match call_action_router(ActionRouterInput::Reports(input), app_config.clone()).await? {
        ActionRouterOutput::Reports(ReportsProcessorOutput::CategoryTotals(report)) => {
            print_header("Monthly Totals");
            let rows = report
                .chart_data
                .iter()
                .map(|point| vec![point.date.clone(), format_money(&point.total)])
                .collect();
            format_table(vec!["Month", "Total"], rows);
            print_info(&format!("{} expenses in this category", report.expenses.len()));
            Ok(())
        }
        ActionRouterOutput::Reports(ReportsProcessorOutput::MonthlySummary(summary)) => {
            print_header("Budget Summary");
            let rows = summary
                .iter()
                .map(|entry| {
                    vec![
                        entry.category_name.clone(),
                        format_money(&entry.total_spent),
                        format_budget(entry.monthly_budget.as_ref()),
                        format_percentage(entry.percentage_used),
                    ]
                })
                .collect();
            format_table(vec!["Category", "Spent", "Budget", "Used"], rows);
            Ok(())
        }
        _ => Err(unexpected()),
    }
}
