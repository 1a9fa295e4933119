use product_store_api::api::ProductsResponse;
use serde_json::json;

const URL: &str = "http://localhost:5000";

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let hc = httpc_test::new_client(URL)?;

    hc.do_get("/").await?.print().await?;
    hc.do_post("/", json!({ "name": "Tablet" })).await?.print().await?;
    hc.do_put("/0", json!({ "name": "Desk" })).await?.print().await?;
    hc.do_get("/0").await?.print().await?;
    hc.do_get("/delete-request/?index=1").await?.print().await?;

    let response = hc.do_get("/").await?;
    let products: ProductsResponse = response.json_body_as()?;
    println!("Products: {}", products.products.join(", "));

    Ok(())
}
