//! Income API endpoints

use api_types::{
    income::{IncomeList, IncomeNew, IncomeUpdate, IncomeView},
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
    Json(payload): Json<IncomeNew>,
) -> Result<(StatusCode, Json<Created>), ServerError> {
    state
        .engine
        .add_income(engine::IncomeCmd {
            source: payload.source,
            amount: payload.amount,
            description: payload.description,
            date: payload.date,
            wallet_id: payload.wallet_id,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(Created {
            message: "An income has been successfully added".to_string(),
        }),
    ))
}

pub async fn list(State(state): State<ServerState>) -> Result<Json<IncomeList>, ServerError> {
    let incomes = state
        .engine
        .incomes()
        .await?
        .into_iter()
        .map(|income| IncomeView {
            id: income.id.to_hex(),
            source: income.source,
            amount: income.amount,
            description: income.description,
            date: income.date,
            wallet_id: income.wallet_id,
        })
        .collect();

    Ok(Json(IncomeList { incomes }))
}

pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<IncomeUpdate>,
) -> Result<(StatusCode, Json<Status>), ServerError> {
    tracing::debug!("Received income id: {id}");

    let updated = state
        .engine
        .update_income(
            &id,
            engine::IncomeUpdateCmd {
                date: payload.date,
                source: payload.source,
                amount: payload.amount,
                description: payload.description,
                wallet_id: payload.wallet_id,
            },
        )
        .await?;

    let (status, message) = if updated {
        (StatusCode::OK, format!("Income with id: {id} is updated"))
    } else {
        (StatusCode::NOT_FOUND, format!("Income with id: {id} is not found"))
    };
    Ok((status, Json(Status { message })))
}

pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<(StatusCode, Json<Status>), ServerError> {
    tracing::debug!("Received income id: {id}");

    let (status, message) = if state.engine.delete_income(&id).await? {
        (StatusCode::OK, format!("Income with id: {id} is deleted"))
    } else {
        (
            StatusCode::NOT_FOUND,
            format!("Failed to delete income with id: {id}"),
        )
    };
    Ok((status, Json(Status { message })))
}
