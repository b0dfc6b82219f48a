use qpbench::bench::*;
use std::io::{Seek, SeekFrom, Write};

fn main() -> std::io::Result<()> {
    let mut file = tempfile::tempfile()?;
    writeln!(
        file,
        r#"{{"verbose": true, "high_accuracy": true, "time_limit": 30.0, "solver": "ECOS"}}"#
    )?;
    file.seek(SeekFrom::Start(0))?;

    let settings = BenchSettings::read_from_file(&mut file)?;
    println!("{:#?}", settings);
    println!("precision tier : {:?}", settings.precision_tier());

    // a bad time limit is rejected at load time
    let err = BenchSettings::from_json_str(r#"{"time_limit": 0}"#);
    println!("zero time limit : {:?}", err.map(|_| ()));

    Ok(())
}
