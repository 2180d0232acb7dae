use dotenvy::dotenv;

use cruxlog::logging::init_tracing;
use cruxlog::router::init_router;
use cruxlog::state::init_app_state;

#[tokio::main]
async fn main() {
    dotenv().ok();

    let args: Vec<String> = std::env::args().collect();

    // Check if this is a CLI command
    if args.len() > 1 && args[1] == "create-admin" {
        handle_create_admin(args).await;
        return;
    }

    // Normal server startup
    init_tracing();

    let state = init_app_state().await;
    let app = init_router(state);

    let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await.unwrap();
    println!("🚀 Server running on http://localhost:3000");
    println!("📚 Swagger UI available at http://localhost:3000/swagger-ui");
    println!("📖 Scalar UI available at http://localhost:3000/scalar");
    axum::serve(listener, app).await.unwrap();
}

async fn handle_create_admin(args: Vec<String>) {
    if args.len() != 5 {
        eprintln!("Usage: {} create-admin <email> <username> <password>", args[0]);
        std::process::exit(1);
    }

    let email = &args[2];
    let username = &args[3];
    let password = &args[4];

    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await
        .expect("Failed to connect to database");

    match cruxlog::cli::create_admin(&pool, email, username, password).await {
        Ok(()) => {
            println!("✅ Admin account created successfully!");
            println!("   Email: {}", email);
            println!("   Username: {}", username);
        }
        Err(e) => {
            eprintln!("❌ Error creating admin account: {}", e);
            std::process::exit(1);
        }
    }
}
