//! Integration test: the result log of a reference run.

use celldevs_engine::{CsvLogger, RootCoordinator, LOG_HEADER};
use celldevs_sir::{reference_config, SirParams};

fn log_of(side: u32, horizon: f64) -> String {
    let (config, grid) = reference_config(side, horizon, SirParams::default()).unwrap();
    let mut root = RootCoordinator::new(config).unwrap();
    root.run().unwrap();

    let mut log = CsvLogger::new(Vec::new()).unwrap();
    let rows = log.write_cells(horizon, &grid, root.models()).unwrap();
    assert_eq!(rows, (side * side) as u64);
    String::from_utf8(log.finish().unwrap()).unwrap()
}

#[test]
fn one_row_per_cell_after_header() {
    let text = log_of(4, 3.0);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], LOG_HEADER);
    assert_eq!(lines.len(), 17);
    for (id, line) in lines[1..].iter().enumerate() {
        let fields: Vec<&str> = line.splitn(4, ';').collect();
        assert_eq!(fields[0], "3");
        assert_eq!(fields[1], id.to_string());
        assert_eq!(fields[2], format!("<{},{}>", id / 4, id % 4));
        assert!(fields[3].starts_with("<100;") && fields[3].ends_with('>'));
        assert_eq!(fields[3].matches(';').count(), 3);
    }
}

#[test]
fn zero_horizon_logs_initial_states() {
    let text = log_of(3, 0.0);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[1], "0;0;<0,0>;<100;1;0;0>");
    assert_eq!(lines[5], "0;4;<1,1>;<100;0.9;0.1;0>");
}
