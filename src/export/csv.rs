use crate::models::habit::HabitEntry;
use crate::models::workout::WorkoutSet;
use csv::Writer;

/// Write the habit log to a CSV file.
pub fn write_habits_csv(path: &str, entries: &[HabitEntry]) -> std::io::Result<()> {
    let mut wtr = Writer::from_path(path)?;

    wtr.write_record(["id", "habit", "value", "date"])?;

    for e in entries {
        wtr.write_record(&[
            e.id.to_string(),
            e.habit.clone(),
            e.value.to_string(),
            e.date_str(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Write the workout log to a CSV file, volume included.
pub fn write_sets_csv(path: &str, sets: &[WorkoutSet]) -> std::io::Result<()> {
    let mut wtr = Writer::from_path(path)?;

    wtr.write_record([
        "id", "date", "exercise", "set_num", "reps", "weight", "volume", "note",
    ])?;

    for s in sets {
        wtr.write_record(&[
            s.id.to_string(),
            s.date_str(),
            s.exercise.clone(),
            s.set_num.to_string(),
            s.reps.to_string(),
            s.weight.to_string(),
            s.volume().to_string(),
            s.note.clone(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
