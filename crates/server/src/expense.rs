//! Expense API endpoints

use api_types::{
    expense::{ExpenseList, ExpenseNew, ExpenseUpdate, ExpenseView},
    message::{Created, Status},
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::{ServerError, server::ServerState};

pub async fn add(
    State(state): State<ServerState>,
    Json(payload): Json<ExpenseNew>,
) -> Result<(StatusCode, Json<Created>), ServerError> {
    state
        .engine
        .add_expense(engine::ExpenseCmd {
            amount: payload.amount,
            date: payload.date,
            category: payload.category,
            description: payload.description,
            repeat_monthly: payload.repeat_monthly,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(Created {
            message: "An expense has been successfully added".to_string(),
        }),
    ))
}

pub async fn list(State(state): State<ServerState>) -> Result<Json<ExpenseList>, ServerError> {
    let expenses = state
        .engine
        .expenses()
        .await?
        .into_iter()
        .map(|expense| ExpenseView {
            id: expense.id.to_hex(),
            amount: expense.amount,
            date: expense.date,
            category: expense.category,
            description: expense.description,
            repeat_monthly: expense.repeat_monthly,
        })
        .collect();

    Ok(Json(ExpenseList { expenses }))
}

pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<ExpenseUpdate>,
) -> Result<(StatusCode, Json<Status>), ServerError> {
    tracing::debug!("Received expense id: {id}");

    let updated = state
        .engine
        .update_expense(
            &id,
            engine::ExpenseUpdateCmd {
                date: payload.date,
                amount: payload.amount,
                category: payload.category,
                description: payload.description,
                repeat_monthly: payload.repeat_monthly,
            },
        )
        .await?;

    let (status, message) = if updated {
        (StatusCode::OK, format!("Expense with id: {id} is updated"))
    } else {
        (StatusCode::NOT_FOUND, format!("Expense with id: {id} is not found"))
    };
    Ok((status, Json(Status { message })))
}

pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<(StatusCode, Json<Status>), ServerError> {
    tracing::debug!("Received expense id: {id}");

    let (status, message) = if state.engine.delete_expense(&id).await? {
        (StatusCode::OK, format!("Expense with id: {id} is deleted"))
    } else {
        (
            StatusCode::NOT_FOUND,
            format!("Failed to delete expense with id: {id}"),
        )
    };
    Ok((status, Json(Status { message })))
}
