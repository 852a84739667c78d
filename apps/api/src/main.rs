//! # Storefront API サーバー
//!
//! Category / Customer / Employee / Product の 4 リソースを公開する
//! CRUD REST API。
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `API_HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `API_PORT` | No | ポート番号（デフォルト: `8080`） |
//! | `DATABASE_URL` | **Yes** | PostgreSQL 接続 URL |
//!
//! ## 起動方法
//!
//! ```bash
//! DATABASE_URL=postgres://... cargo run -p storefront-api
//! ```

use std::{net::SocketAddr, sync::Arc};

use storefront_api::{
   config::ApiConfig,
   handler::CrudState,
   router::{AppStates, build_app},
   usecase::CrudUseCase,
};
use storefront_infra::{
   db,
   repository::{
      PostgresCategoryRepository,
      PostgresCustomerRepository,
      PostgresEmployeeRepository,
      PostgresProductRepository,
   },
};
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// API サーバーのエントリーポイント
#[tokio::main]
async fn main() -> anyhow::Result<()> {
   // .env ファイルを読み込む（存在する場合）
   dotenvy::dotenv().ok();

   // トレーシング初期化
   tracing_subscriber::registry()
      .with(
         tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "info,storefront=debug".into()),
      )
      .with(tracing_subscriber::fmt::layer())
      .init();

   // 設定読み込み
   let config = ApiConfig::from_env();

   tracing::info!("API サーバーを起動します: {}:{}", config.host, config.port);

   // データベース接続プールを作成し、マイグレーションを適用
   let pool = db::create_pool(&config.database_url)
      .await
      .expect("データベース接続に失敗しました");
   db::run_migrations(&pool)
      .await
      .expect("マイグレーションの適用に失敗しました");
   tracing::info!("データベースに接続しました");

   // リポジトリ → ユースケース → State の順に依存を組み立てる
   let states = AppStates {
      categories: Arc::new(CrudState {
         usecase: CrudUseCase::new(Arc::new(PostgresCategoryRepository::new(pool.clone()))),
      }),
      customers:  Arc::new(CrudState {
         usecase: CrudUseCase::new(Arc::new(PostgresCustomerRepository::new(pool.clone()))),
      }),
      employees:  Arc::new(CrudState {
         usecase: CrudUseCase::new(Arc::new(PostgresEmployeeRepository::new(pool.clone()))),
      }),
      products:   Arc::new(CrudState {
         usecase: CrudUseCase::new(Arc::new(PostgresProductRepository::new(pool))),
      }),
   };

   let app = build_app(states);

   // サーバー起動
   let addr: SocketAddr = format!("{}:{}", config.host, config.port)
      .parse()
      .expect("アドレスのパースに失敗しました");

   let listener = TcpListener::bind(addr).await?;
   tracing::info!("API サーバーが起動しました: {}", addr);

   axum::serve(listener, app).await?;

   Ok(())
}
