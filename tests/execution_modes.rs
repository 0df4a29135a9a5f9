use parallel_ages::{
    run_all, run_parallel, run_serial, AgeCalculator, Config, Mode, Scientist, SharedWriter,
    WorkerPool, SCIENTISTS,
};
use std::io::Write;
use std::sync::{Arc, Mutex};
use std::time::Duration;

#[test]
fn test_modes_agree_on_full_dataset() {
    let calc = AgeCalculator::new(2024, Duration::ZERO);
    let pool = WorkerPool::new(4).unwrap();

    let serial = run_serial(&SCIENTISTS, &calc).unwrap();
    let parallel = run_parallel(&SCIENTISTS, &calc, &pool).unwrap();

    assert_eq!(serial.len(), SCIENTISTS.len());
    assert_eq!(serial, parallel);
    for (scientist, result) in SCIENTISTS.iter().zip(&parallel) {
        assert_eq!(result.name, scientist.name);
        assert_eq!(result.age, 2024 - scientist.born);
    }
}

#[test]
fn test_larger_generated_dataset_keeps_order() {
    let names: Vec<String> = (0..40).map(|i| format!("Scientist {}", i)).collect();
    let records: Vec<Scientist> = names
        .iter()
        .enumerate()
        .map(|(i, name)| Scientist {
            name: Box::leak(name.clone().into_boxed_str()),
            field: "math",
            born: 1900 + i as i32,
            nobel: i % 3 == 0,
        })
        .collect();

    let calc = AgeCalculator::new(2000, Duration::from_millis(2));
    let pool = WorkerPool::new(8).unwrap();
    let results = run_parallel(&records, &calc, &pool).unwrap();

    let ages: Vec<i32> = results.iter().map(|r| r.age).collect();
    let expected: Vec<i32> = (0..40).map(|i| 100 - i).collect();
    assert_eq!(ages, expected);
    assert_eq!(results[39].name, "Scientist 39");
}

#[test]
fn test_config_file_drives_run() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
delay_ms = 0
workers = 2
reference_year = 2024
quiet = true
modes = ["rayon", "serial"]
"#
    )
    .unwrap();

    let config = Config::load(file.path()).unwrap();
    let buffer = Arc::new(Mutex::new(Vec::<u8>::new()));
    let out: SharedWriter = buffer.clone();
    let reports = run_all(&config, &SCIENTISTS, &out).unwrap();

    assert_eq!(reports.len(), 2);
    assert_eq!(reports[0].mode, Mode::Rayon);
    assert_eq!(reports[1].mode, Mode::Serial);
    assert_eq!(reports[0].results, reports[1].results);
    assert_eq!(reports[0].results[0].age, 209);

    let text = String::from_utf8(buffer.lock().unwrap().clone()).unwrap();
    assert!(text.find("Rayon execution").unwrap() < text.find("Serial execution").unwrap());
    assert!(!text.contains("working record"));
}
