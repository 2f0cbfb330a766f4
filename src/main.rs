use clap::Parser;
use pkgmeta::utils::{logger, validation::Validate};
use pkgmeta::{CliConfig, LocalStorage, ManifestPipeline, MetadataEngine, PackageDescriptor};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting pkgmeta CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    // 載入並驗證套件描述檔
    let descriptor = match PackageDescriptor::from_file(&config.descriptor) {
        Ok(descriptor) => descriptor,
        Err(e) => {
            tracing::error!("❌ Failed to load descriptor '{}': {}", config.descriptor, e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 建議: {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    if let Err(e) = descriptor.validate() {
        tracing::error!("❌ Descriptor validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 建議: {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    // 創建存儲和管道
    let storage = LocalStorage::new(config.output_path.clone());
    let pipeline = ManifestPipeline::new(storage, config, descriptor);

    // 創建引擎並運行
    let engine = MetadataEngine::new(pipeline);

    match engine.run() {
        Ok(output_path) => {
            tracing::info!("✅ Metadata assembly completed successfully!");
            tracing::info!("📁 Output saved to: {}", output_path);
            println!("✅ Metadata assembly completed successfully!");
            println!("📁 Output saved to: {}", output_path);
        }
        Err(e) => {
            // 記錄詳細錯誤信息
            tracing::error!(
                "❌ Metadata assembly failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            // 輸出用戶友好的錯誤信息
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 建議: {}", e.recovery_suggestion());

            // 根據錯誤嚴重程度決定退出碼
            let exit_code = match e.severity() {
                pkgmeta::utils::error::ErrorSeverity::Low => 0,
                pkgmeta::utils::error::ErrorSeverity::Medium => 2,
                pkgmeta::utils::error::ErrorSeverity::High => 1,
                pkgmeta::utils::error::ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}
