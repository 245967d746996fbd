//! Files, View & Status Command Tests
//!
//! Direct (non-interactive) access to spool listings, spool content, and
//! job detail.

use anyhow::Result;
use jespool_testing::{TestWorld, fixtures};

const SYSOUT: &str = "LINE ONE\nLINE TWO\n";

fn staged_world() -> TestWorld {
    TestWorld::new()
        .with_job(fixtures::job("J1", "JOBA", "IBMUSER"))
        .with_spool_file("J1", fixtures::spool_file(101, "JESMSGLG"), SYSOUT)
        .with_spool_file("J1", fixtures::spool_file(102, "JESJCL"), "//JOBA JOB\n")
        .with_spool_file("J1", fixtures::step_file(103, "SYSPRINT", "STEP1"), "OK\n")
}

#[test]
fn test_files_json_counts_the_spool_files() -> Result<()> {
    // Given: a job with three spool files
    let world = staged_world();

    // When: listing its files as JSON
    let result = world.run(&["files", "J1", "--format", "json"])?;

    // Then: the message counts them and the records ride along
    assert!(result.success(), "Command should succeed");
    let json = result.json()?;
    assert_eq!(
        json["message"],
        "\"3\" spool files obtained for job \"JOBA(J1)\""
    );
    assert_eq!(json["data"].as_array().unwrap().len(), 3);
    assert_eq!(json["data"][0]["ddname"], "JESMSGLG");
    assert_eq!(json["data"][2]["stepname"], "STEP1");

    Ok(())
}

#[test]
fn test_files_plain_lists_the_spool_table() -> Result<()> {
    // Given: a job with three spool files
    let world = staged_world();

    // When: listing its files in plain format
    let result = world.run(&["files", "J1"])?;

    // Then: aligned table, blank step cells for JES-owned data sets
    assert!(result.success(), "Command should succeed");
    let lines: Vec<&str> = result.stdout().lines().collect();
    assert_eq!(lines[0], "ID   DDNAME    PROCSTEP  STEPNAME");
    assert_eq!(lines[1], "101  JESMSGLG");
    assert_eq!(lines[3], "103  SYSPRINT            STEP1");

    Ok(())
}

#[test]
fn test_files_of_a_job_without_spool_output() -> Result<()> {
    // Given: a job that produced nothing
    let world = TestWorld::new().with_job(fixtures::job("J9", "QUIET", "IBMUSER"));

    // When: listing its files as JSON
    let result = world.run(&["files", "J9", "--format", "json"])?;

    // Then: an empty listing, counted as zero
    assert!(result.success(), "Command should succeed");
    let json = result.json()?;
    assert_eq!(
        json["message"],
        "\"0\" spool files obtained for job \"QUIET(J9)\""
    );
    assert_eq!(json["data"].as_array().unwrap().len(), 0);

    Ok(())
}

#[test]
fn test_view_prints_content_verbatim() -> Result<()> {
    // Given: a job with staged spool content
    let world = staged_world();

    // When: viewing one spool file
    let result = world.run(&["view", "J1", "101"])?;

    // Then: the file comes out byte for byte
    assert!(result.success(), "Command should succeed");
    assert_eq!(result.stdout(), SYSOUT);

    Ok(())
}

#[test]
fn test_view_json_wraps_the_content() -> Result<()> {
    // Given: a job with staged spool content
    let world = staged_world();

    // When: viewing one spool file as JSON
    let result = world.run(&["view", "J1", "101", "--format", "json"])?;

    // Then: message plus the content as the data payload
    assert!(result.success(), "Command should succeed");
    let json = result.json()?;
    assert_eq!(
        json["message"],
        "Spool file \"101\" content obtained for job \"JOBA(J1)\""
    );
    assert_eq!(json["data"], SYSOUT);

    Ok(())
}

#[test]
fn test_view_rejects_non_numeric_spool_id() -> Result<()> {
    // Given: a staged archive
    let world = staged_world();

    // When: passing a ddname where the numeric id belongs
    let result = world.run(&["view", "J1", "JESMSGLG"])?;

    // Then: argument parsing fails before any archive access
    assert!(!result.success(), "Non-numeric id must be rejected");
    assert!(result.stderr().contains("invalid value"));

    Ok(())
}

#[test]
fn test_view_reports_a_missing_spool_file() -> Result<()> {
    // Given: a staged archive
    let world = staged_world();

    // When: asking for an id the job does not have
    let result = world.run(&["view", "J1", "999"])?;

    // Then: a spool-file-level error naming both identities
    assert!(!result.success(), "Missing spool file is an error");
    assert!(
        result
            .stderr()
            .contains("Spool file \"999\" not found for job \"J1\"")
    );

    Ok(())
}

#[test]
fn test_unknown_job_is_reported() -> Result<()> {
    // Given: a staged archive
    let world = staged_world();

    // When: naming a job that is not in the archive
    let result = world.run(&["files", "NOPE"])?;

    // Then: a job-level error on stderr
    assert!(!result.success(), "Unknown job is an error");
    assert!(
        result
            .stderr()
            .contains("Job \"NOPE\" not found in the spool archive")
    );

    Ok(())
}

#[test]
fn test_job_id_lookup_ignores_case() -> Result<()> {
    // Given: a staged archive
    let world = staged_world();

    // When: using a lowercase job id
    let result = world.run(&["view", "j1", "101"])?;

    // Then: the job resolves all the same
    assert!(result.success(), "Command should succeed");
    assert_eq!(result.stdout(), SYSOUT);

    Ok(())
}

#[test]
fn test_status_plain_shows_labelled_fields() -> Result<()> {
    // Given: a finished job
    let world = staged_world();

    // When: asking for its status
    let result = world.run(&["status", "J1"])?;

    // Then: one labelled field per line
    assert!(result.success(), "Command should succeed");
    assert!(result.stdout().contains("jobname: JOBA"));
    assert!(result.stdout().contains("status:  OUTPUT"));
    assert!(result.stdout().contains("retcode: CC 0000"));

    Ok(())
}

#[test]
fn test_status_json_wraps_the_job() -> Result<()> {
    // Given: a finished job
    let world = staged_world();

    // When: asking for its status as JSON
    let result = world.run(&["status", "J1", "--format", "json"])?;

    // Then: message plus the full job record
    assert!(result.success(), "Command should succeed");
    let json = result.json()?;
    assert_eq!(json["message"], "Job status obtained for job \"JOBA(J1)\"");
    assert_eq!(json["data"]["jobid"], "J1");
    assert_eq!(json["data"]["status"], "OUTPUT");

    Ok(())
}

#[test]
fn test_status_of_an_active_job_prints_null_retcode() -> Result<()> {
    // Given: a job still executing
    let world = TestWorld::new().with_job(fixtures::active_job("J5", "LONGRUN", "IBMUSER"));

    // When: asking for its status
    let result = world.run(&["status", "J5"])?;

    // Then: the absent completion code reads null
    assert!(result.success(), "Command should succeed");
    assert!(result.stdout().contains("retcode: null"));
    assert!(result.stdout().contains("status:  ACTIVE"));

    Ok(())
}
