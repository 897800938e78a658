//! CSV export of line waveforms, one row per sample.

use std::fs::File;
use std::io;
use std::path::Path;

use phasesim_core::{LineWaveforms, SimError, SimResult};
use tracing::info;

pub const HEADER: [&str; 7] = [
    "t", "v_line_1", "v_line_2", "v_line_3", "i_line_1", "i_line_2", "i_line_3",
];

pub fn write_csv<W, S>(writer: W, waveforms: &S) -> SimResult<()>
where
    W: io::Write,
    S: LineWaveforms + ?Sized,
{
    let mut wtr = csv::Writer::from_writer(writer);
    let voltages = waveforms.line_voltages();
    let currents = waveforms.line_currents();

    wtr.write_record(HEADER).map_err(csv_error)?;
    for (i, t) in waveforms.time().iter().enumerate() {
        let mut record = Vec::with_capacity(HEADER.len());
        record.push(t.to_string());
        record.extend(voltages.iter().map(|phase| phase[i].to_string()));
        record.extend(currents.iter().map(|phase| phase[i].to_string()));
        wtr.write_record(&record).map_err(csv_error)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn write_csv_file<S>(path: &Path, waveforms: &S) -> SimResult<()>
where
    S: LineWaveforms + ?Sized,
{
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let file = File::create(path)?;
    write_csv(file, waveforms)?;
    info!("wrote {} samples to {}", waveforms.time().len(), path.display());
    Ok(())
}

fn csv_error(err: csv::Error) -> SimError {
    SimError::Serialization(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use phasesim_core::units::{Hertz, Ohms, Seconds, Volts};
    use phasesim_core::{simulate_balanced, simulate_unbalanced, LoadType, PhaseLoad};
    use tempfile::tempdir;

    #[test]
    fn test_balanced_csv_layout() {
        let w = simulate_balanced(Volts(230.0), Ohms(10.0), 0.9, Hertz(50.0), Seconds(0.02));
        let mut out = Vec::new();
        write_csv(&mut out, &w).unwrap();

        let mut reader = csv::Reader::from_reader(out.as_slice());
        let headers: Vec<String> = reader
            .headers()
            .unwrap()
            .iter()
            .map(String::from)
            .collect();
        assert_eq!(headers, HEADER);

        let rows: Vec<csv::StringRecord> = reader.records().map(Result::unwrap).collect();
        assert_eq!(rows.len(), 1000);
        let last: f64 = rows[999][0].parse().unwrap();
        assert_eq!(last, 0.02);
        let i1: f64 = rows[250][4].parse().unwrap();
        assert_eq!(i1, w.line_current[0][250]);
    }

    #[test]
    fn test_unbalanced_csv_holds_real_parts() {
        let loads = [PhaseLoad::new(Ohms(10.0), 0.8, LoadType::Inductive); 3];
        let w = simulate_unbalanced(Volts(400.0), &loads, Hertz(50.0), Seconds(0.02));
        let mut out = Vec::new();
        write_csv(&mut out, &w).unwrap();

        let mut reader = csv::Reader::from_reader(out.as_slice());
        let row = reader.records().nth(100).unwrap().unwrap();
        let i3: f64 = row[6].parse().unwrap();
        assert_eq!(i3, w.line_current[2][100].re);
    }

    #[test]
    fn test_write_csv_file_creates_parent_dirs() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("runs").join("balanced.csv");
        let w = simulate_balanced(Volts(120.0), Ohms(4.0), 1.0, Hertz(60.0), Seconds(0.1));
        write_csv_file(&path, &w).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("t,v_line_1,"));
        assert_eq!(text.lines().count(), 1001);
    }
}
