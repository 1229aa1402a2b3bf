#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::fs;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};
use std::thread;

use testlog::log::{
    console_sink::ConsoleSink,
    file_sink::FileSink,
    line_format::strip_ansi,
    log_level::LogLevel,
    logger::Logger,
    logger_config::{LoggerConfig, LoggerOptions},
};
use testlog::reporter::{
    LifecycleLogger, Reporter,
    lifecycle_event::replay,
    test_case::{TestCase, TestError, TestResult},
};

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Captured {
    fn text(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Strips the timestamp so console and file lines can be compared.
fn bodies(text: &str) -> Vec<String> {
    text.lines()
        .map(strip_ansi)
        .map(|l| l.split_once(' ').map(|(_, rest)| rest.to_string()).unwrap())
        .collect()
}

fn run_scenario(rep: &dyn Reporter) {
    rep.on_test_begin(&TestCase::new("Login test"));
    rep.on_test_end(&TestCase::new("Login test"), &TestResult::new("passed"));
    rep.on_test_end(&TestCase::new("X"), &TestResult::new("skipped"));
    rep.on_test_end(&TestCase::new("X"), &TestResult::new("failed"));
    rep.on_test_end(&TestCase::new("X"), &TestResult::new("interrupted"));
    rep.on_error(&TestError::new("timeout"));
}

#[test]
fn scenario_reaches_console_and_file_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("logs").join("run.log");
    let console = Captured::default();

    let file_sink = FileSink::open(&path, LogLevel::Info).unwrap();
    assert_eq!(file_sink.path(), path.as_path());
    let logger = Logger::with_sinks(vec![
        Box::new(ConsoleSink::with_writer(
            LogLevel::Info,
            Box::new(console.clone()),
            true,
        )),
        Box::new(file_sink),
    ]);
    let config = LoggerConfig::new(LogLevel::Info, Some(path.clone()));
    let rep = LifecycleLogger::with_logger(config, logger);

    run_scenario(&rep);

    let expected = [
        "[info]: 🚀 Test Started: Login test",
        "[info]: ✅ Passed: Login test",
        "[warn]: ⏭ Skipped: X",
        "[error]: ❌ Failed: X",
        "[error]: 💥 Error: timeout",
    ];
    let file_text = fs::read_to_string(&path).unwrap();
    assert!(!file_text.contains('\x1b'));
    assert_eq!(bodies(&file_text), expected);
    assert_eq!(bodies(&console.text()), expected);
}

#[test]
fn without_file_path_no_file_is_created() {
    let dir = tempfile::tempdir().unwrap();
    let previous = std::env::current_dir().unwrap();
    std::env::set_current_dir(dir.path()).unwrap();

    let rep = LifecycleLogger::from_options(&LoggerOptions::default()).unwrap();
    rep.print_config();
    run_scenario(&rep);
    drop(rep);

    let created = fs::read_dir(dir.path()).unwrap().count();
    std::env::set_current_dir(previous).unwrap();
    assert_eq!(created, 0, "no file sink configured, yet files appeared");
}

#[test]
fn file_path_option_writes_plain_lines() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("reporter.log");
    let opts = LoggerOptions {
        log_level: Some("warn".into()),
        file_path: Some(path.to_string_lossy().into_owned()),
    };
    let rep = LifecycleLogger::from_options(&opts).unwrap();
    rep.print_config();
    run_scenario(&rep);

    let text = fs::read_to_string(&path).unwrap();
    assert_eq!(
        bodies(&text),
        [
            "[warn]: ⏭ Skipped: X",
            "[error]: ❌ Failed: X",
            "[error]: 💥 Error: timeout",
        ]
    );
}

#[test]
fn parallel_workers_never_interleave_lines() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("parallel.log");
    let logger = Logger::with_sinks(vec![Box::new(FileSink::open(&path, LogLevel::Info).unwrap())]);
    let rep = Arc::new(LifecycleLogger::with_logger(
        LoggerConfig::new(LogLevel::Info, Some(path.clone())),
        logger,
    ));

    let workers: Vec<_> = (0..4)
        .map(|w| {
            let rep = Arc::clone(&rep);
            thread::spawn(move || {
                for i in 0..50 {
                    rep.on_test_begin(&TestCase::new(format!("worker {w} test {i}")));
                }
            })
        })
        .collect();
    for w in workers {
        w.join().unwrap();
    }

    let text = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 200);
    assert!(lines.iter().all(|l| l.contains("[info]: 🚀 Test Started: worker ")));
}

#[test]
fn json_lines_replay_drives_the_logger() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("replay.log");
    let logger = Logger::with_sinks(vec![Box::new(FileSink::open(&path, LogLevel::Info).unwrap())]);
    let rep = LifecycleLogger::with_logger(LoggerConfig::default(), logger);

    let events = concat!(
        "{\"event\":\"testBegin\",\"test\":{\"title\":\"Cart\"}}\n",
        "{\"event\":\"testEnd\",\"test\":{\"title\":\"Cart\"},\"result\":{\"status\":\"failed\"}}\n",
    );
    assert_eq!(replay(events.as_bytes(), &rep).unwrap(), 2);

    let text = fs::read_to_string(&path).unwrap();
    assert_eq!(
        bodies(&text),
        ["[info]: 🚀 Test Started: Cart", "[error]: ❌ Failed: Cart"]
    );
}
