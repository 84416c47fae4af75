use std::path::PathBuf;
use std::process::ExitCode;

use hook_gateway::hook::{HookError, HookValidator};
use hook_gateway::loader::{HookLoader, HookSet};
use hook_gateway::logging::init_logging;
use hook_gateway::routing::PathStrategyFinder;
use hook_gateway::schema::SchemaCatalog;
use hook_gateway::settings::Settings;
use tracing::{error, info};

#[tokio::main]
async fn main() -> ExitCode {
    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("설정 로드 실패: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let _guard = init_logging(&settings.logging);

    // 스키마 컴파일 실패는 시작을 중단시킴
    let catalog = match SchemaCatalog::builtin() {
        Ok(catalog) => catalog,
        Err(e) => {
            error!(error = %e, "스키마 카탈로그 초기화 실패");
            return ExitCode::FAILURE;
        }
    };
    let validator = match HookValidator::new(&catalog) {
        Ok(validator) => validator,
        Err(e) => {
            error!(error = %e, "훅 검증기 초기화 실패");
            return ExitCode::FAILURE;
        }
    };

    let finder = PathStrategyFinder::new(settings.gateway.path_processing_strategy);
    info!(strategy = %finder.default_strategy(), "경로 처리 전략 준비 완료");

    let loader = HookLoader::new(validator);
    let files: Vec<PathBuf> = std::env::args().skip(1).map(PathBuf::from).collect();

    let set = if !files.is_empty() {
        load_files(&loader, &files).await
    } else if let Some(dir) = &settings.gateway.hooks_dir {
        match loader.load_dir(dir).await {
            Ok(set) => set,
            Err(e) => {
                error!(error = %e, "훅 디렉토리 로드 실패");
                return ExitCode::FAILURE;
            }
        }
    } else {
        eprintln!("사용법: hook_gateway [FILE...] (또는 GATEWAY_HOOKS_DIR 설정)");
        return ExitCode::FAILURE;
    };

    report(&set);
    if set.is_clean() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

async fn load_files(loader: &HookLoader, files: &[PathBuf]) -> HookSet {
    let mut set = HookSet::default();
    for path in files {
        let name = path.to_string_lossy().to_string();
        let result = loader.load_file(path, &name).await;
        set.record(name, result);
    }
    set
}

fn report(set: &HookSet) {
    for (name, hook) in &set.hooks {
        println!("OK      {} -> {}", name, hook.destination);
    }
    for (name, e) in &set.rejected {
        match e {
            HookError::Invalid(diagnostics) => {
                println!("INVALID {} ({}건)", name, diagnostics.len());
                for diagnostic in diagnostics {
                    println!("        {}", diagnostic);
                }
            }
            other => println!("ERROR   {}: {}", name, other),
        }
    }
}
