use engine::{Engine, EngineError, ExpenseCmd, ExpenseUpdateCmd, ObjectId, Store};
use serde_json::Number;

async fn engine_with_store() -> (Engine, Store) {
    let store = Store::connect("sqlite::memory:", engine::DEFAULT_TIMEOUT)
        .await
        .unwrap();
    (Engine::new(&store), store)
}

fn groceries() -> ExpenseCmd {
    ExpenseCmd {
        amount: Number::from(42),
        date: "2024-02-03T10:15:00.250000".to_string(),
        category: "Food".to_string(),
        description: "Weekly groceries".to_string(),
        repeat_monthly: false,
    }
}

#[tokio::test]
async fn add_expense_shows_up_in_list() {
    let (engine, _store) = engine_with_store().await;
    assert!(engine.expenses().await.unwrap().is_empty());

    let id = engine.add_expense(groceries()).await.unwrap();

    let expenses = engine.expenses().await.unwrap();
    assert_eq!(expenses.len(), 1);
    let expense = &expenses[0];
    assert_eq!(expense.id, id);
    assert_eq!(expense.amount, Number::from(42));
    assert_eq!(expense.category, "Food");
    assert_eq!(expense.description, "Weekly groceries");
    assert!(!expense.repeat_monthly);
    assert_eq!(
        expense.date.to_rfc3339(),
        "2024-02-03T10:15:00.250+00:00".to_string()
    );
}

#[tokio::test]
async fn each_create_adds_exactly_one_entry() {
    let (engine, _store) = engine_with_store().await;

    for n in 0..3 {
        let mut cmd = groceries();
        cmd.description = format!("groceries #{n}");
        engine.add_expense(cmd).await.unwrap();
        assert_eq!(engine.expenses().await.unwrap().len(), n + 1);
    }
}

#[tokio::test]
async fn float_amounts_are_kept() {
    let (engine, _store) = engine_with_store().await;
    let mut cmd = groceries();
    cmd.amount = Number::from_f64(12.5).unwrap();

    let id = engine.add_expense(cmd).await.unwrap();

    let expense = engine.expense(&id.to_hex()).await.unwrap().unwrap();
    assert_eq!(expense.amount.as_f64(), Some(12.5));
}

#[tokio::test]
async fn add_expense_rejects_bad_date() {
    let (engine, _store) = engine_with_store().await;
    let mut cmd = groceries();
    cmd.date = "03/02/2024".to_string();

    let err = engine.add_expense(cmd).await.unwrap_err();
    assert_eq!(err, EngineError::InvalidDate("03/02/2024".to_string()));
    assert!(engine.expenses().await.unwrap().is_empty());
}

#[tokio::test]
async fn update_merges_only_given_fields() {
    let (engine, _store) = engine_with_store().await;
    let id = engine.add_expense(groceries()).await.unwrap().to_hex();

    let updated = engine
        .update_expense(
            &id,
            ExpenseUpdateCmd::new("2024-02-10T09:00:00.000000")
                .amount(50)
                .repeat_monthly(true),
        )
        .await
        .unwrap();
    assert!(updated);

    let expense = engine.expense(&id).await.unwrap().unwrap();
    assert_eq!(expense.amount, Number::from(50));
    assert!(expense.repeat_monthly);
    assert_eq!(expense.category, "Food");
    assert_eq!(expense.description, "Weekly groceries");
    assert_eq!(
        expense.date.to_rfc3339(),
        "2024-02-10T09:00:00+00:00".to_string()
    );
}

#[tokio::test]
async fn update_unknown_id_reports_no_match() {
    let (engine, _store) = engine_with_store().await;
    engine.add_expense(groceries()).await.unwrap();

    let updated = engine
        .update_expense(
            &ObjectId::new().to_hex(),
            ExpenseUpdateCmd::new("2024-02-10T09:00:00.000000").category("Rent"),
        )
        .await
        .unwrap();
    assert!(!updated);
    assert_eq!(engine.expenses().await.unwrap()[0].category, "Food");
}

#[tokio::test]
async fn update_checks_date_and_id() {
    let (engine, _store) = engine_with_store().await;
    let id = engine.add_expense(groceries()).await.unwrap().to_hex();

    let err = engine
        .update_expense(&id, ExpenseUpdateCmd::new("2024-02-10"))
        .await
        .unwrap_err();
    assert_eq!(err, EngineError::InvalidDate("2024-02-10".to_string()));

    let err = engine
        .update_expense("42", ExpenseUpdateCmd::new("2024-02-10T09:00:00.000000"))
        .await
        .unwrap_err();
    assert_eq!(err, EngineError::InvalidId("42".to_string()));
}

#[tokio::test]
async fn delete_removes_expense() {
    let (engine, _store) = engine_with_store().await;
    let id = engine.add_expense(groceries()).await.unwrap().to_hex();
    let other = engine.add_expense(groceries()).await.unwrap();

    assert!(engine.delete_expense(&id).await.unwrap());

    assert!(engine.expense(&id).await.unwrap().is_none());
    let remaining = engine.expenses().await.unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, other);

    assert!(!engine.delete_expense(&id).await.unwrap());
}

#[tokio::test]
async fn delete_rejects_malformed_id() {
    let (engine, _store) = engine_with_store().await;

    let err = engine.delete_expense("xyz").await.unwrap_err();
    assert_eq!(err, EngineError::InvalidId("xyz".to_string()));
}

#[tokio::test]
async fn list_fails_on_document_missing_a_field() {
    let (engine, store) = engine_with_store().await;
    engine.add_expense(groceries()).await.unwrap();

    let id = store
        .collection(engine::EXPENSE_COLLECTION)
        .insert_one(bson::doc! { "amount": 10, "description": "no category" })
        .await
        .unwrap();

    match engine.expenses().await {
        Err(EngineError::MalformedDocument { id: bad, .. }) => assert_eq!(bad, id.to_hex()),
        other => panic!("expected a malformed document error, got {other:?}"),
    }
}
