use pairdish_import::sources::{catalog_inputs, parse_scraped, read_csv, DEFAULT_MIN_SIDES};
use pairdish_import::model::MAX_SIDE_DISHES;
use pairdish_import::{
    assemble_keyword, import_pairings, BatchImporter, DryRunUploader, HttpUploader,
    ImportOptions,
};
use std::time::Duration;

fn no_delay() -> ImportOptions {
    ImportOptions {
        delay: Duration::ZERO,
        ..ImportOptions::default()
    }
}

#[test]
fn test_beef_wellington_payload() {
    let group = assemble_keyword(
        "what to serve with beef wellington",
        ["Roasted Potatoes", "Yorkshire Pudding"],
    )
    .unwrap();

    let payload = serde_json::to_value(&group).unwrap();
    let main = &payload["main_dish"];
    assert_eq!(main["name"], "Beef Wellington");
    assert_eq!(main["slug"], "beef-wellington");
    assert_eq!(main["dish_type"], "main");
    assert_eq!(main["cuisine"], "British");
    assert_eq!(
        main["seo_title"],
        "What to Serve with Beef Wellington - 2 Best Side Dishes | PairDish"
    );
    assert_eq!(main["keywords"][0], "what to serve with beef wellington");
    assert!(main.get("recipe").is_none());

    let sides = payload["side_dishes"].as_array().unwrap();
    assert_eq!(sides.len(), 2);

    let potatoes = &sides[0];
    assert_eq!(potatoes["slug"], "roasted-potatoes");
    assert_eq!(potatoes["dish_type"], "side");
    assert_eq!(potatoes["cuisine"], "International");
    assert_eq!(potatoes["recipe"]["difficulty"], "easy");
    assert_eq!(potatoes["recipe"]["prep_time"], 15);
    assert_eq!(potatoes["recipe"]["cook_time"], 45);
    assert_eq!(potatoes["recipe"]["servings"], 4);
    assert_eq!(
        potatoes["dietary_tags"],
        serde_json::json!(["vegetarian", "vegan", "gluten-free"])
    );
    assert!(potatoes["description"]
        .as_str()
        .unwrap()
        .contains("Beef Wellington"));

    let pudding = &sides[1];
    assert_eq!(pudding["slug"], "yorkshire-pudding");
    assert_eq!(pudding["cuisine"], "British");
    assert_eq!(pudding["dietary_tags"], serde_json::json!([]));
}

#[tokio::test]
async fn test_csv_master_list_over_http() {
    let mut server = mockito::Server::new_async().await;
    let rejected = server
        .mock("POST", "/api/import-dishes")
        .match_body(mockito::Matcher::Regex(r#""name":"Pad Thai""#.to_string()))
        .with_status(422)
        .with_body("duplicate slug")
        .create_async()
        .await;
    let accepted = server
        .mock("POST", "/api/import-dishes")
        .match_body(mockito::Matcher::Regex(
            r#""main_dish":\{"name":"(Beef Wellington|Coq au Vin)""#.to_string(),
        ))
        .with_status(200)
        .expect(2)
        .create_async()
        .await;

    let csv = "keyword;main_dish;side_dish_1;side_dish_2\n\
               what to serve with beef wellington;;Roasted Potatoes;Yorkshire Pudding\n\
               what to serve with pad thai;;Spring Rolls;Papaya Salad\n\
               ;;Rice;Beans\n\
               what to serve with coq au vin;Coq au Vin;Crusty Bread;Mashed Potatoes\n";
    let rows = read_csv(csv.as_bytes()).unwrap();

    let uploader = HttpUploader::with_endpoint(
        format!("{}/api/import-dishes", server.url()),
        Some("secret".to_string()),
        5,
    )
    .unwrap();
    let run = BatchImporter::new(uploader, no_delay())
        .run(rows)
        .await
        .unwrap();

    assert_eq!(run.total_processed(), 4);
    assert_eq!(run.processed_dishes(), ["Beef Wellington", "Coq au Vin"]);
    assert_eq!(run.failed(), 2);
    assert_eq!(run.failures()[0].dish, "Pad Thai");
    assert_eq!(run.failures()[0].error, "API error: 422 - duplicate slug");
    assert_eq!(run.failures()[1].dish, "Row 3");
    assert_eq!(run.failures()[1].error, "missing dish identifier");

    rejected.assert_async().await;
    accepted.assert_async().await;
}

#[tokio::test]
async fn test_timed_out_upload_is_recorded_and_batch_continues() {
    let mut server = mockito::Server::new_async().await;
    let _slow = server
        .mock("POST", "/api/import-dishes")
        .match_body(mockito::Matcher::Regex(r#""name":"Pad Thai""#.to_string()))
        .with_status(200)
        .with_body_from_request(|_| {
            std::thread::sleep(Duration::from_millis(1500));
            Vec::new()
        })
        .create_async()
        .await;
    let fast = server
        .mock("POST", "/api/import-dishes")
        .match_body(mockito::Matcher::Regex(r#""name":"Sushi""#.to_string()))
        .with_status(200)
        .create_async()
        .await;

    let uploader =
        HttpUploader::with_endpoint(format!("{}/api/import-dishes", server.url()), None, 1)
            .unwrap();
    let rows = vec![
        Ok(pairdish_import::PairingInput::for_dish("Pad Thai", ["Spring Rolls"])),
        Ok(pairdish_import::PairingInput::for_dish("Sushi", ["Miso Soup"])),
    ];
    let run = BatchImporter::new(uploader, no_delay()).run(rows).await.unwrap();

    assert_eq!(run.total_processed(), 2);
    assert_eq!(run.failures()[0].dish, "Pad Thai");
    assert_eq!(run.failures()[0].error, "Request timed out after 1s");
    assert_eq!(run.processed_dishes(), ["Sushi"]);
    fast.assert_async().await;
}

#[tokio::test]
async fn test_catalog_dry_run() {
    let run = import_pairings(DryRunUploader, catalog_inputs(), no_delay())
        .await
        .unwrap();
    assert_eq!(run.total_processed(), 14);
    assert_eq!(run.successful(), 14);
    assert!(run.processed_dishes().contains(&"Coq au Vin".to_string()));
}

#[test]
fn test_scraped_items_are_capped_and_typed() {
    let sides: Vec<String> = (1..=20).map(|i| format!("\"Side Salad {i}\"")).collect();
    let json = format!(
        r#"[{{"query": "what to serve with steak", "side_dishes": [{}, "Chocolate Lava Cake"]}}]"#,
        sides.join(", ")
    );
    let rows = parse_scraped(&json, DEFAULT_MIN_SIDES).unwrap();
    let input = rows[0].as_ref().unwrap();

    let group = pairdish_import::assemble(input, &Default::default()).unwrap();
    assert_eq!(group.main_dish.name, "Steak");
    assert_eq!(group.side_dishes.len(), MAX_SIDE_DISHES);
    assert_eq!(group.side_dishes[0].name, "Side Salad 1");
    assert_eq!(group.side_dishes[14].name, "Side Salad 15");
}
