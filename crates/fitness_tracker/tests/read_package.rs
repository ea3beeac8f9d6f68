use fitness_tracker::{TrackerError, read_package};

fn render(code: &str, data: &[f64]) -> String {
    read_package(code, data)
        .expect("valid package")
        .show_training_info()
        .get_message()
}

#[test]
fn swimming_summary() {
    assert_eq!(
        render("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]),
        "Тип тренировки: Swimming; Длительность: 1.000 ч.; Дистанция: 0.994 км; \
         Ср. скорость: 1.000 км/ч; Потрачено ккал: 336.000."
    );
}

#[test]
fn running_summary() {
    assert_eq!(
        render("RUN", &[15000.0, 1.0, 75.0]),
        "Тип тренировки: Running; Длительность: 1.000 ч.; Дистанция: 9.750 км; \
         Ср. скорость: 9.750 км/ч; Потрачено ккал: 797.805."
    );
}

#[test]
fn walking_summary() {
    assert_eq!(
        render("WLK", &[9000.0, 1.0, 75.0, 180.0]),
        "Тип тренировки: SportsWalking; Длительность: 1.000 ч.; Дистанция: 5.850 км; \
         Ср. скорость: 5.850 км/ч; Потрачено ккал: 349.252."
    );
}

#[test]
fn every_number_has_three_decimals() {
    let line = render("RUN", &[12345.0, 1.5, 68.3]);
    let numbers: Vec<&str> = line
        .split(|c: char| !(c.is_ascii_digit() || c == '.'))
        .filter(|s| s.contains('.') && s.len() > 1)
        .collect();
    assert_eq!(numbers.len(), 4, "{line}");
    for n in numbers {
        let decimals = n.split('.').nth(1).expect("fraction");
        assert_eq!(decimals.len(), 3, "{n} in {line}");
    }
}

#[test]
fn unknown_code_fails() {
    let err = read_package("XYZ", &[1.0, 1.0, 1.0]).unwrap_err();
    assert!(matches!(err, TrackerError::UnknownWorkout(ref c) if c == "XYZ"));
}

#[test]
fn swimming_needs_pool_values() {
    let err = read_package("SWM", &[720.0, 1.0, 80.0]).unwrap_err();
    assert_eq!(err.to_string(), "SWM expects 5 values, got 3");
}
