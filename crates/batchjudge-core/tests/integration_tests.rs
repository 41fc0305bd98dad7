//! Integration tests for batchjudge-core
//!
//! These tests run the judging workflow on folders built in a temp dir.

use std::fs;
use std::path::Path;

use batchjudge_core::config::TemplateConfig;
use batchjudge_core::judge::{JudgeSummary, format_ratings_raw};
use batchjudge_core::{
    BatchCsv, BatchScanner, ChartField, JudgeNotes, SetJudgments, generate_template,
    write_batch_csv, write_forum_post, write_report_files, write_steppers,
};
use tempfile::TempDir;

fn add_song(batch: &Path, folder: &str, chart_file: &str, chart: &str) {
    let dir = batch.join(folder);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join(chart_file), chart).unwrap();
    fs::write(dir.join("song.ogg"), b"").unwrap();
}

fn sample_batch(root: &Path) -> std::path::PathBuf {
    let batch = root.join("MayBatch");
    add_song(
        &batch,
        "Moonearth (Tyler)",
        "moonearth.sm",
        "#TITLE:moonearth;\n#ARTIST:DJ Sharpnel;\n#CREDIT:x;\n#NOTES:\n     dance-single:\n",
    );
    add_song(&batch, "valedict [Nick]", "valedict.dwi", "#TITLE:valedict;\n#ARTIST:void;\n");
    add_song(&batch, "Mystery {Kid}", "mystery.sm", "#TITLE:Mystery;\n\n#ARTIST:late;\n");
    fs::create_dir_all(batch.join("no stepper here")).unwrap();
    batch
}

mod batch_tests {
    use super::*;

    #[test]
    fn test_scan_and_write_csv() {
        let root = TempDir::new().unwrap();
        let batch = sample_batch(root.path());

        let scanner = BatchScanner::default();
        let report = scanner.scan(&batch).unwrap();
        assert_eq!(report.len(), 3);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].subject, "no stepper here");

        let path = write_batch_csv(&batch, &report.items, scanner.fields()).unwrap();
        assert!(path.ends_with("MayBatch/MayBatch.csv"));
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "[FOLDER],[ARTIST],[STEPARTIST],[TITLE]\n\
             Moonearth (Tyler),DJ Sharpnel,Tyler,Moonearth\n\
             Mystery {Kid},,Kid,Mystery\n\
             valedict [Nick],void,Nick,valedict\n"
        );

        let csv = BatchCsv::load(&path).unwrap();
        assert_eq!(csv.batch_name(), "MayBatch");
        assert_eq!(csv.step_artists().unwrap(), vec!["Tyler", "Kid", "Nick"]);
    }

    #[test]
    fn test_extra_fields() {
        let root = TempDir::new().unwrap();
        let batch = sample_batch(root.path());

        let scanner = BatchScanner::new(vec![ChartField::Title, ChartField::Credit]);
        let report = scanner.scan(&batch).unwrap();
        let moonearth = &report.items[0];
        assert_eq!(moonearth.get(ChartField::Credit), "x");
        assert_eq!(moonearth.get(ChartField::Title), "Moonearth");
        assert_eq!(moonearth.get(ChartField::Artist), "");
    }
}

mod workflow_tests {
    use super::*;

    #[test]
    fn test_template_then_steppers() {
        let root = TempDir::new().unwrap();
        let batch = sample_batch(root.path());
        let scanner = BatchScanner::default();
        let report = scanner.scan(&batch).unwrap();
        let csv_path = write_batch_csv(&batch, &report.items, scanner.fields()).unwrap();

        let template = generate_template(&csv_path, &TemplateConfig::default()).unwrap();
        assert!(template.ends_with("template_MayBatch.txt"));
        let text = fs::read_to_string(&template).unwrap();
        assert_eq!(
            text,
            "[/10] Moonearth {DJ Sharpnel}\n-\n-\n\n\
             [/10] Mystery {UNKNOWN}\n-\n-\n\n\
             [/10] valedict {void}\n-\n-\n\n"
        );

        // A judge fills in the template and submits it next to the CSV.
        let notes = text
            .replacen("[/10] Moonearth", "[7.5/10] Moonearth", 1)
            .replacen("[/10] Mystery", "[PASS] Mystery", 1)
            .replacen("[/10] valedict", "[++] valedict", 1);
        fs::write(batch.join("Tyler_Notes_MayBatch.txt"), notes).unwrap();

        let csv = BatchCsv::load(&csv_path).unwrap();
        let written = write_steppers(&csv).unwrap();
        assert!(written.is_clean());
        assert_eq!(written.items.len(), 1);

        let with_steppers = fs::read_to_string(&written.items[0]).unwrap();
        assert!(with_steppers.starts_with("[7.5/10] Moonearth {DJ Sharpnel} (Tyler)\n-\n-\n"));
        assert!(with_steppers.contains("[PASS] Mystery {UNKNOWN} (Kid)\n"));
        assert!(with_steppers.contains("[++] valedict {void} (Nick)\n"));

        // Running again does not pick up the generated copy.
        let again = write_steppers(&csv).unwrap();
        assert_eq!(again.items, written.items);
    }

    #[test]
    fn test_judge_report_files() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("Tyler_Notes_MayBatch.txt");
        fs::write(
            &path,
            "[8/10] A {a} (x)\n- good\n[6/10] B {b}\n[++] C {c}\n[PASS] D {d}\n[huh] E {e}\n",
        )
        .unwrap();

        let notes = JudgeNotes::load(&path).unwrap();
        assert_eq!(notes.judge, "Tyler");
        assert_eq!(notes.ratings.len(), 4);
        assert_eq!(notes.ratings.failures.len(), 1);

        let stats = notes.stats();
        assert_eq!(stats.average, Some(8.0));
        assert_eq!(stats.judged_files, 3);
        assert_eq!(stats.special_files, 1);

        let files = write_report_files(&notes.judge, &stats, notes.dir()).unwrap();
        assert!(files.ratings_to_songs.ends_with("ratingsToSongs_Tyler.txt"));
        assert_eq!(
            fs::read_to_string(&files.ratings_raw).unwrap(),
            format_ratings_raw(&stats)
        );

        let json = JudgeSummary::new(&notes).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["judge"], "Tyler");
        assert_eq!(value["total_files"], 4);
        assert_eq!(value["unparsed_lines"].as_array().unwrap().len(), 1);
    }
}

mod set_tests {
    use super::*;

    #[test]
    fn test_judgments_csv() {
        let root = TempDir::new().unwrap();
        let set = root.path().join("set12");
        fs::create_dir(&set).unwrap();
        fs::write(
            set.join("Alpha_Notes_May.txt"),
            "[7/10] Song A {Artist A}\n-\n[--] Song B {Artist B}\n",
        )
        .unwrap();
        fs::write(
            set.join("Alpha_Notes_May_steppers.txt"),
            "[7/10] Song A {Artist A} (Tyler)\n-\n[--] Song B {Artist B} (Nick)\n",
        )
        .unwrap();
        fs::write(
            set.join("Beta_Notes_May_steppers.txt"),
            "[PASS] Song A {Artist A} (Tyler)\n[oops] Song B {Artist B} (Nick)\n",
        )
        .unwrap();
        fs::write(set.join("readme.md"), "not notes").unwrap();

        let (judgments, report) = SetJudgments::load(&set).unwrap();
        assert!(report.is_clean());
        assert_eq!(judgments.set_number, "12");
        assert_eq!(judgments.judges.len(), 2);

        let path = judgments.write(&set).unwrap();
        assert!(path.ends_with("judgments_set12.csv"));
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "Song,Stepartist,Set,Alpha,Beta,supp\n\
             Song A,Tyler,12,7,PASS,\n\
             Song B,Nick,12,0,,\n"
        );
    }

    #[test]
    fn test_forum_post() {
        let root = TempDir::new().unwrap();
        let set1 = root.path().join("set1");
        let set2 = root.path().join("set2");
        fs::create_dir(&set1).unwrap();
        fs::create_dir(&set2).unwrap();
        fs::write(
            set1.join("Alpha_Format.txt"),
            "[7/10] Song A {Artist A} (Tyler)\n- solid\n",
        )
        .unwrap();
        fs::write(set1.join("Beta_Format.txt"), "[PASS] Song A {Artist A} (Tyler)\n").unwrap();
        fs::write(set2.join("notes.txt"), "[6/10] Song B {Artist B}\n").unwrap();

        let (path, report) = write_forum_post(root.path()).unwrap();
        assert!(report.is_clean());
        assert!(path.ends_with("forum_post.txt"));
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "[b][size=4]1.) SET 1[/size][/b]\n\
             [b]a.) Alpha[/b]\n\
             [b]b.) Beta[/b]\n\
             [b][size=4]2.) SET 2[/size][/b]\n\
             [b]a.) Judge[/b]\n\
             \n\
             [b][size=7]SET 1[/size][/b]\
             \n\n[b][size=4]=== JUDGE: Alpha ===[/size][/b]\n\
             \n[b][7/10] Song A {Artist A} (Tyler)[/b]\
             \n- solid\
             \n\n[b][size=4]=== JUDGE: Beta ===[/size][/b]\n\
             \n[b][PASS] Song A {Artist A} (Tyler)[/b]\
             \n\n[b][size=7]SET 2[/size][/b]\
             \n\n[b][size=4]=== JUDGE: Judge ===[/size][/b]\n\
             \n[6/10] Song B {Artist B}\n"
        );
    }
}
