use async_trait::async_trait;
use leadership_summary::error::GenerationError;
use leadership_summary::models::load_score_table;
use leadership_summary::models::worked_examples;
use leadership_summary::services::result_exporter::{self, SUMMARY_COLUMN};
use leadership_summary::utils::logging;
use leadership_summary::{App, CellValue, Config, RunOutcome, SummaryGenerator};
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio_test::{assert_err, assert_ok};

/// 第 `fail_on` 次调用失败，其余返回固定文本
struct FakeGenerator {
    calls: AtomicUsize,
    fail_on: Option<usize>,
}

impl FakeGenerator {
    fn new(fail_on: Option<usize>) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            fail_on,
        }
    }
}

#[async_trait]
impl SummaryGenerator for FakeGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        if Some(call) == self.fail_on {
            return Err(GenerationError::EmptyContent {
                model: "fake".to_string(),
            });
        }
        let name = prompt
            .lines()
            .find_map(|line| line.strip_prefix("# Name: "))
            .unwrap_or("?");
        Ok(format!("{} demonstrates potential.", name))
    }
}

fn config_in(dir: &Path) -> Config {
    Config {
        input_file: dir.join("input.xlsx").display().to_string(),
        output_file: dir.join("output.xlsx").display().to_string(),
        sample_template_file: dir.join("template.xlsx").display().to_string(),
        output_log_file: dir.join("summaries.txt").display().to_string(),
        llm_api_key: None,
        secrets_file: dir.join("missing-secrets.toml").display().to_string(),
        ..Config::default()
    }
}

fn write_input(config: &Config) {
    let table = worked_examples::table_of(&worked_examples::ALL);
    let bytes = result_exporter::write_table(&table, "Sheet1").unwrap();
    std::fs::write(&config.input_file, bytes).unwrap();
}

#[tokio::test]
async fn test_missing_credential_stops_before_any_row() {
    logging::init(false);
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path());
    write_input(&config);

    let app = App::initialize(config.clone());
    let err = assert_err!(app.run().await);

    assert!(err.is_config(), "{}", err);
    assert!(!Path::new(&config.output_file).exists());
    assert!(!Path::new(&config.output_log_file).exists());
}

#[tokio::test]
async fn test_unreadable_upload_is_a_format_error() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config {
        llm_api_key: Some("unused".to_string()),
        ..config_in(dir.path())
    };
    std::fs::write(&config.input_file, b"name,score\nPo,3\n").unwrap();

    let err = assert_err!(App::initialize(config.clone()).run().await);

    assert!(err.is_format(), "{}", err);
    assert!(!Path::new(&config.output_file).exists());
}

#[tokio::test]
async fn test_sample_template_written_when_input_missing() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path());

    let outcome = assert_ok!(App::initialize(config.clone()).run().await);

    let RunOutcome::TemplateWritten { path } = outcome else {
        panic!("应写出示例模板");
    };
    let table = load_score_table(&std::fs::read(path).unwrap()).unwrap();
    assert_eq!(table.columns().len(), 34);
    assert_eq!(table.records()[0].get("Name"), Some(&CellValue::from("Tinky Winky")));
}

#[tokio::test(start_paused = true)]
async fn test_generate_export_and_reload() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path());
    write_input(&config);

    let app = App::initialize(config.clone());
    let table = assert_ok!(app.load_table().await);
    let generator = FakeGenerator::new(Some(1));

    let outcome = assert_ok!(app.generate_with(table.clone(), &generator).await);
    let RunOutcome::Generated { output_file, stats } = outcome else {
        panic!("应生成结果");
    };
    assert_eq!(stats.total, 3);
    assert_eq!(stats.failed, 1);

    let reloaded = load_score_table(&std::fs::read(output_file).unwrap()).unwrap();
    assert_eq!(reloaded.columns().len(), table.columns().len() + 1);
    assert_eq!(&reloaded.columns()[..table.columns().len()], table.columns());
    for (orig, back) in table.records().iter().zip(reloaded.records()) {
        for (column, value) in orig.iter() {
            assert_eq!(back.get(column), Some(value));
        }
    }

    let summaries: Vec<String> = reloaded
        .column_values(SUMMARY_COLUMN)
        .iter()
        .map(|v| v.to_string())
        .collect();
    assert_eq!(summaries.len(), table.len());
    assert_eq!(summaries[0], "Dipsy demonstrates potential.");
    assert!(summaries[1].starts_with("Error generating summary for Po: "));
    assert_eq!(summaries[2], "Tinky Winky demonstrates potential.");

    let log = std::fs::read_to_string(&config.output_log_file).unwrap();
    assert!(log.contains("Generated Summary for Tinky Winky (3/3)"));
}

#[tokio::test]
#[ignore] // 需要 GEMINI_API_KEY 和 INPUT_FILE：cargo test -- --ignored
async fn test_run_against_live_service() {
    logging::init(true);

    let config = Config::from_env();
    let outcome = App::initialize(config).run().await;

    assert!(outcome.is_ok(), "{:?}", outcome.err());
}
