use std::{fs::File, io::{BufWriter, Write as _}, path::Path};

use anyhow::Context as _;
use hamstergen_evolver::GenerationRecord;

/// Writes the full run history as CSV: one row per generation, one column
/// per pool item, mirroring the console report in spreadsheet form.
///
/// Column order follows the pools' fixed entry order, so every row lines up
/// with the header taken from the first record.
pub(crate) fn write_csv(records: &[GenerationRecord], path: &Path) -> anyhow::Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create CSV file: {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    write_csv_to(records, &mut writer)?;
    writer
        .flush()
        .with_context(|| format!("Failed to write CSV to {}", path.display()))?;
    Ok(())
}

fn write_csv_to<W>(records: &[GenerationRecord], writer: &mut W) -> anyhow::Result<()>
where
    W: std::io::Write,
{
    let Some(first) = records.first() else {
        return Ok(());
    };

    write!(writer, "generation,fit_fraction")?;
    for (name, _) in &first.trait_weights {
        write!(writer, ",{name}")?;
    }
    for (value, _) in &first.health_weights {
        write!(writer, ",health_{value}")?;
    }
    writeln!(writer)?;

    for record in records {
        write!(writer, "{},{}", record.generation, record.fit_fraction)?;
        for (_, weight) in &record.trait_weights {
            write!(writer, ",{weight}")?;
        }
        for (_, weight) in &record.health_weights {
            write!(writer, ",{weight}")?;
        }
        writeln!(writer)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use hamstergen_engine::{RunSeed, catalog};
    use hamstergen_evolver::{
        EngineState, EvolutionEngine, NullReporter, RunConfig, SelectionPolicy,
    };

    use super::*;

    fn sample_records(generation_limit: usize) -> Vec<GenerationRecord> {
        let engine = EvolutionEngine::new(
            RunConfig {
                target_power: 7,
                generation_size: 20,
                selection: SelectionPolicy::TopFraction(0.5),
                generation_limit,
                desired_fitness: 1.0,
            },
            catalog::default_species(),
        )
        .unwrap();
        let state =
            EngineState::new(catalog::default_trait_pool(), catalog::default_health_pool());
        let mut rng = RunSeed::from_bytes([9; 16]).rng();
        engine
            .run(state, &mut rng, &mut NullReporter)
            .unwrap()
            .records
    }

    #[test]
    fn test_csv_layout() {
        let records = sample_records(3);
        let mut buffer = Vec::new();
        write_csv_to(&records, &mut buffer).unwrap();
        let csv = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = csv.lines().collect();

        // Header plus one row per generation.
        assert_eq!(lines.len(), 1 + records.len());
        assert!(lines[0].starts_with("generation,fit_fraction,Reserved,"));
        assert!(lines[0].ends_with(",health_10"));

        // Every row has the same column count as the header.
        let columns = lines[0].split(',').count();
        assert_eq!(columns, 2 + 10 + 10);
        for line in &lines[1..] {
            assert_eq!(line.split(',').count(), columns);
        }
        assert!(lines[1].starts_with("0,"));
    }

    #[test]
    fn test_empty_history_writes_nothing() {
        let mut buffer = Vec::new();
        write_csv_to(&[], &mut buffer).unwrap();
        assert!(buffer.is_empty());
    }
}
