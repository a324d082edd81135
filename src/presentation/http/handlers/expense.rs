//! Expense Handlers

use axum::{
    extract::{Path, State},
    Json,
};

use crate::application::dto::request::ExpenseRequest;
use crate::application::dto::response::{ExpenseResponse, MessageResponse};
use crate::presentation::http::extractors::ValidatedJson;
use crate::shared::error::AppError;
use crate::shared::validation::parse_id;
use crate::startup::AppState;

/// List expenses across all destinations
pub async fn list_expenses(
    State(state): State<AppState>,
) -> Result<Json<Vec<ExpenseResponse>>, AppError> {
    let expenses = state.expenses.list_expenses().await?;

    Ok(Json(expenses.into_iter().map(ExpenseResponse::from).collect()))
}

/// List the expenses of one destination
pub async fn list_destination_expenses(
    State(state): State<AppState>,
    Path(destination_id): Path<String>,
) -> Result<Json<Vec<ExpenseResponse>>, AppError> {
    let destination_id = parse_id(&destination_id, "destination")?;

    let expenses = state.expenses.list_for_destination(destination_id).await?;

    Ok(Json(expenses.into_iter().map(ExpenseResponse::from).collect()))
}

/// Add an expense to a destination
pub async fn add_expense(
    State(state): State<AppState>,
    Path(destination_id): Path<String>,
    ValidatedJson(body): ValidatedJson<ExpenseRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    let destination_id = parse_id(&destination_id, "destination")?;

    let expense = state
        .expenses
        .add_expense(destination_id, body.into())
        .await?;

    Ok(Json(MessageResponse::created(
        "Expense added successfully",
        expense.id,
    )))
}

/// Get one expense of a destination
pub async fn get_expense(
    State(state): State<AppState>,
    Path((destination_id, expense_id)): Path<(String, String)>,
) -> Result<Json<ExpenseResponse>, AppError> {
    let destination_id = parse_id(&destination_id, "destination")?;
    let expense_id = parse_id(&expense_id, "expense")?;

    let expense = state.expenses.get_expense(destination_id, expense_id).await?;

    Ok(Json(ExpenseResponse::from(expense)))
}

/// Replace an expense's category and amount
pub async fn update_expense(
    State(state): State<AppState>,
    Path((destination_id, expense_id)): Path<(String, String)>,
    ValidatedJson(body): ValidatedJson<ExpenseRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    let destination_id = parse_id(&destination_id, "destination")?;
    let expense_id = parse_id(&expense_id, "expense")?;

    state
        .expenses
        .update_expense(destination_id, expense_id, body.into())
        .await?;

    Ok(Json(MessageResponse::new("Expense updated successfully")))
}

/// Delete an expense
pub async fn delete_expense(
    State(state): State<AppState>,
    Path((destination_id, expense_id)): Path<(String, String)>,
) -> Result<Json<MessageResponse>, AppError> {
    let destination_id = parse_id(&destination_id, "destination")?;
    let expense_id = parse_id(&expense_id, "expense")?;

    state
        .expenses
        .delete_expense(destination_id, expense_id)
        .await?;

    Ok(Json(MessageResponse::new("Expense deleted successfully")))
}
