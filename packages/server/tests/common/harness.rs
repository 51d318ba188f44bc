//! Test harness with testcontainers for integration testing.
//!
//! Uses one shared Postgres container across all tests. The container and
//! migrations are initialized on the first test, then reused.

use anyhow::{Context, Result};
use axum::Router;
use leads_core::domains::auth::JwtService;
use leads_core::server::build_app;
use sqlx::PgPool;
use std::sync::Arc;
use test_context::AsyncTestContext;
use testcontainers::runners::AsyncRunner;
use testcontainers::{ContainerAsync, ImageExt};
use testcontainers_modules::postgres::Postgres;
use tokio::sync::OnceCell;

/// Lowest cost bcrypt accepts; keeps hashing fast in tests
pub const TEST_BCRYPT_COST: u32 = 4;

const TEST_JWT_SECRET: &str = "test_secret_key";
const TEST_JWT_ISSUER: &str = "test_issuer";

/// Shared test infrastructure that persists across all tests.
struct SharedTestInfra {
    db_url: String,
    // Keep the container alive for the entire test run
    _postgres: ContainerAsync<Postgres>,
}

/// Global shared infrastructure - initialized once, reused by all tests.
static SHARED_INFRA: OnceCell<SharedTestInfra> = OnceCell::const_new();

impl SharedTestInfra {
    async fn init() -> Result<Self> {
        // Run tests with: RUST_LOG=debug cargo test -- --nocapture
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();

        let postgres = Postgres::default()
            .with_tag("16")
            .with_cmd(["-c", "max_connections=200"])
            .start()
            .await
            .context("Failed to start Postgres container")?;

        let pg_host = postgres.get_host().await?;
        let pg_port = postgres.get_host_port_ipv4(5432).await?;
        let db_url = format!(
            "postgresql://postgres:postgres@{}:{}/postgres",
            pg_host, pg_port
        );

        // Run migrations once on the shared database
        let pool = PgPool::connect(&db_url)
            .await
            .context("Failed to connect to Postgres for migrations")?;

        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .context("Failed to run migrations")?;

        Ok(Self {
            db_url,
            _postgres: postgres,
        })
    }

    async fn get() -> &'static Self {
        SHARED_INFRA
            .get_or_init(|| async {
                Self::init()
                    .await
                    .expect("Failed to initialize shared test infrastructure")
            })
            .await
    }
}

/// Test harness that manages test infrastructure.
///
/// Every test shares one database, so fixtures must use unique emails
/// (see [`super::unique_email`]).
///
/// ```ignore
/// use test_context::test_context;
///
/// #[test_context(TestHarness)]
/// #[tokio::test]
/// async fn my_test(ctx: &TestHarness) {
///     let app = ctx.router();
///     // ... test code
/// }
/// ```
pub struct TestHarness {
    /// Database pool - use this for test fixtures.
    pub db_pool: PgPool,
    /// Token service matching the one wired into [`TestHarness::router`]
    pub jwt_service: Arc<JwtService>,
}

impl AsyncTestContext for TestHarness {
    async fn setup() -> Self {
        Self::new()
            .await
            .expect("Failed to create test harness")
    }

    async fn teardown(self) {
        // Database pool is automatically dropped
    }
}

impl TestHarness {
    pub async fn new() -> Result<Self> {
        let infra = SharedTestInfra::get().await;

        let db_pool = PgPool::connect(&infra.db_url)
            .await
            .context("Failed to connect to test database")?;

        let jwt_service = Arc::new(JwtService::new(
            TEST_JWT_SECRET,
            TEST_JWT_ISSUER.to_string(),
            chrono::Duration::minutes(30),
        ));

        Ok(Self {
            db_pool,
            jwt_service,
        })
    }

    /// Full HTTP application backed by this harness's pool
    pub fn router(&self) -> Router {
        build_app(
            self.db_pool.clone(),
            self.jwt_service.clone(),
            TEST_BCRYPT_COST,
            None,
        )
        .expect("Failed to build router")
    }

    /// Mint a valid bearer token for an agent id
    pub fn token_for(&self, agent_id: leads_core::common::AgentId) -> String {
        self.jwt_service
            .create_token(agent_id)
            .expect("Failed to create token")
    }
}
