use clap::Parser;
use santa_draw::core::generator::DrawSettings;
use santa_draw::domain::ports::AssignmentStore;
use santa_draw::utils::{logger, validation::Validate};
use santa_draw::{CliConfig, CsvExporter, DrawEngine, JsonFileStore, LogNotifier, PoolFile};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting santa-draw CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    // 載入並驗證池定義
    let pool_file = match PoolFile::from_file(&config.pool_file) {
        Ok(pool_file) => pool_file,
        Err(e) => {
            tracing::error!("❌ Failed to load pool file '{}': {}", config.pool_file, e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    if let Err(e) = pool_file.validate() {
        tracing::error!("❌ Pool definition validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    // CLI 參數優先於檔案設定
    let year = config.year.unwrap_or_else(|| pool_file.year());
    let settings = DrawSettings {
        max_attempts: config
            .max_attempts
            .unwrap_or(pool_file.draw_settings().max_attempts),
    };
    let seed = config.seed.or_else(|| pool_file.seed());

    let roster = pool_file.into_roster();

    // 建立儲存與引擎
    let store = JsonFileStore::new(config.output_path.clone());
    let engine = DrawEngine::new(store, LogNotifier, settings).with_seed(seed);

    match engine.run(&roster, year).await {
        Ok(summary) => {
            tracing::info!(
                "✅ Drew {} assignments for pool '{}' ({})",
                summary.assignment_count,
                summary.pool,
                summary.year
            );
            println!(
                "✅ Drew {} assignments for pool '{}' ({})",
                summary.assignment_count, summary.pool, summary.year
            );
            println!("📁 Assignments saved to: {}", summary.output_location);

            if config.export_csv {
                let exporter = CsvExporter::new(config.output_path.clone());
                let store = JsonFileStore::new(config.output_path.clone());
                let assignments = store.load_assignments(year, &roster.name).await?;
                let csv_path = exporter.export(&roster, &assignments)?;
                println!("📁 CSV export saved to: {}", csv_path);
            }
        }
        Err(e) => {
            tracing::error!(
                "❌ Draw failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            // 根據錯誤嚴重程度決定退出碼
            let exit_code = match e.severity() {
                santa_draw::utils::error::ErrorSeverity::Low => 0,
                santa_draw::utils::error::ErrorSeverity::Medium => 2,
                santa_draw::utils::error::ErrorSeverity::High => 1,
                santa_draw::utils::error::ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}
