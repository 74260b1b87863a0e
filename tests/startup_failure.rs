//! Startup must abort when the store cannot be reached.

use product_service::config::Config;
use product_service::services::ProductDb;
use product_service::Application;

// Nothing listens on port 1; the short timeouts keep the tests fast.
const UNREACHABLE_URI: &str =
    "mongodb://127.0.0.1:1/?serverSelectionTimeoutMS=500&connectTimeoutMS=500";

#[tokio::test]
async fn connect_fails_when_store_is_unreachable() {
    let result = ProductDb::connect(UNREACHABLE_URI, "startup_failure_db").await;

    assert!(result.is_err());
}

#[tokio::test]
async fn application_build_fails_when_store_is_unreachable() {
    std::env::set_var("DATABASE_URL", UNREACHABLE_URI);

    let config = Config::from_env().expect("Failed to load configuration");
    let result = Application::build(config).await;

    assert!(result.is_err());
}
