#[warn(unused_imports)]
#[macro_export]
macro_rules! test_with_server {
    ($name:ident, |$server:ident, $ctx_state:ident, $config:ident| $body:block) => {

        #[tokio::test(flavor="multi_thread")]
        #[serial_test::serial]
        async fn $name() {
            use axum_test::{TestServer, TestServerConfig};
            use folio_likes::config::AppConfig;
            use folio_likes::middleware::mw_ctx::create_ctx_state;
            use futures::FutureExt;
            use std::panic::resume_unwind;

            let $config = AppConfig {
                db_namespace: "test".to_string(),
                db_database: "test".to_string(),
                db_password: None,
                db_username: None,
                db_url: "mem://".to_string(),
                port: 0,
                like_tx_retries: 10,
                liked_cookie_max_age_days: 1,
                allowed_origin: None,
                sentry_project_link: None,
            };

            let $ctx_state = {
                let db = $crate::helpers::connect_test_db(&$config).await;
                create_ctx_state(db, &$config)
            };

            let routes_all = folio_likes::init::main_router(&$ctx_state, &$config);

            let $server = TestServer::new_with_config(
                routes_all,
                TestServerConfig {
                    save_cookies: true,
                    expect_success_by_default: false,
                    ..TestServerConfig::default()
                },
            )
            .expect("Failed to create test server");

            let test_result = std::panic::AssertUnwindSafe(async {
                (|| async $body)().await;
            })
            .catch_unwind()
            .await;

            $ctx_state.clone().db.client
                .query(format!("REMOVE DATABASE {};", $config.db_database))
                .await
                .expect("failed to remove database");

            if let Err(panic) = test_result {
                resume_unwind(panic);
            }
        }
    };
}

#[warn(unused_imports)]
#[macro_export]
macro_rules! test_with_db {
    ($name:ident, |$db:ident| $body:block) => {

        #[tokio::test(flavor="multi_thread")]
        #[serial_test::serial]
        async fn $name() {
            use folio_likes::config::AppConfig;
            use futures::FutureExt;
            use std::panic::resume_unwind;

            let config = AppConfig {
                db_namespace: "test".to_string(),
                db_database: "test".to_string(),
                db_password: None,
                db_username: None,
                db_url: "mem://".to_string(),
                port: 0,
                like_tx_retries: 10,
                liked_cookie_max_age_days: 1,
                allowed_origin: None,
                sentry_project_link: None,
            };

            let $db = std::sync::Arc::new($crate::helpers::connect_test_db(&config).await);

            let test_result = std::panic::AssertUnwindSafe(async {
                (|| async $body)().await;
            })
            .catch_unwind()
            .await;

            $db.client
                .query(format!("REMOVE DATABASE {};", config.db_database))
                .await
                .expect("failed to remove database");

            if let Err(panic) = test_result {
                resume_unwind(panic);
            }
        }
    };
}
