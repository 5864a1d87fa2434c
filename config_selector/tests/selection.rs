//! End-to-end selection scenarios exercising the public API with real
//! directories and redirected platform environment variables.

use std::path::PathBuf;

use anyhow::{Context, Result, ensure};
use config_selector::{ConfigFileSelector, LookupPlace};
use rstest::{fixture, rstest};
use serial_test::serial;
use tempfile::TempDir;
use test_helpers::{cwd, env as test_env};

#[fixture]
fn temp_dir() -> Result<TempDir> {
    TempDir::new().context("create temp dir")
}

/// The canonical scenario: `app.conf` registered for the working directory
/// and the home directory, but present only under home.
#[rstest]
#[serial]
fn home_candidate_wins_when_working_directory_is_empty(
    #[from(temp_dir)] work: Result<TempDir>,
    #[from(temp_dir)] home: Result<TempDir>,
) -> Result<()> {
    let work = work?;
    let home = home?;
    let expected = home.path().join("app.conf");
    std::fs::write(&expected, "key = value\n").context("write home config")?;

    let _home_guard = test_env::set_var("HOME", home.path());
    let _profile_guard = test_env::remove_var("USERPROFILE");
    let _cwd_guard = cwd::set_dir(work.path()).context("enter empty working dir")?;

    let selector = ConfigFileSelector::new(
        "app.conf",
        [LookupPlace::CurrentPath, LookupPlace::HomeDir],
    );
    let selected = selector.select_first_known_place()?;
    ensure!(
        selected == expected,
        "expected the home candidate, found {selected:?}"
    );
    Ok(())
}

#[rstest]
#[serial]
fn working_directory_precedes_home_when_both_exist(
    #[from(temp_dir)] work: Result<TempDir>,
    #[from(temp_dir)] home: Result<TempDir>,
) -> Result<()> {
    let work = work?;
    let home = home?;
    let expected = work.path().join("app.conf");
    std::fs::write(&expected, "key = work\n").context("write work config")?;
    std::fs::write(home.path().join("app.conf"), "key = home\n").context("write home config")?;

    let _home_guard = test_env::set_var("HOME", home.path());
    let _profile_guard = test_env::remove_var("USERPROFILE");
    let _cwd_guard = cwd::set_dir(work.path()).context("enter working dir")?;

    let selector = ConfigFileSelector::builder("app.conf")
        .place(LookupPlace::CurrentPath)
        .place(LookupPlace::HomeDir)
        .build();
    let selected = selector.select_first_known_place()?;
    // The OS may report the working directory with symlinks resolved, so
    // compare canonical forms.
    ensure!(
        selected.canonicalize().context("canonicalise selected")?
            == expected.canonicalize().context("canonicalise expected")?,
        "expected the working-directory candidate to win, found {selected:?}"
    );
    Ok(())
}

#[rstest]
#[serial]
fn relative_override_is_resolved_against_user_config(
    #[from(temp_dir)] work: Result<TempDir>,
    #[from(temp_dir)] config_home: Result<TempDir>,
) -> Result<()> {
    let work = work?;
    let config_home = config_home?;
    let expected = config_home.path().join("alternate.conf");
    std::fs::write(&expected, "key = value\n").context("write alternate config")?;

    let _xdg_guard = test_env::set_var("XDG_CONFIG_HOME", config_home.path());
    let _cwd_guard = cwd::set_dir(work.path()).context("enter empty working dir")?;

    let selector = ConfigFileSelector::builder("app.conf")
        .place(LookupPlace::CurrentPath)
        .place(LookupPlace::UserConfig)
        .build();
    let selection = selector.select_path("alternate.conf")?;
    ensure!(
        selection.path == expected,
        "expected the override found under XDG_CONFIG_HOME, found {:?}",
        selection.path
    );
    ensure!(selection.filename == "alternate.conf");
    ensure!(selector.filename() == "app.conf", "selector must stay unchanged");
    Ok(())
}

#[rstest]
fn not_found_diagnostics_list_attempted_candidates(
    #[from(temp_dir)] first: Result<TempDir>,
    #[from(temp_dir)] second: Result<TempDir>,
) -> Result<()> {
    let first = first?;
    let second = second?;
    let selector = ConfigFileSelector::builder("ghost.conf")
        .places([first.path().to_path_buf(), second.path().to_path_buf()])
        .build();

    let err = match selector.select_first_known_place() {
        Ok(path) => anyhow::bail!("expected no candidate, found {path:?}"),
        Err(err) => err,
    };
    ensure!(err.is_not_found());
    let rendered = err.to_string();
    for dir in [first.path(), second.path()] {
        let candidate = dir.join("ghost.conf");
        ensure!(
            rendered.contains(&candidate.display().to_string()),
            "diagnostics must list {candidate:?}, got: {rendered}"
        );
    }
    Ok(())
}

#[rstest]
fn builder_and_mutator_registration_agree(temp_dir: Result<TempDir>) -> Result<()> {
    let root = temp_dir?;
    let built = ConfigFileSelector::builder("app.conf")
        .place(LookupPlace::Path(root.path().to_path_buf()))
        .place(LookupPlace::Path(root.path().to_path_buf()))
        .etc()
        .build();

    let mut assembled = ConfigFileSelector::new("app.conf", []);
    assembled.add_lookup_place(LookupPlace::Path(root.path().to_path_buf()));
    assembled.add_lookup_place(LookupPlace::Path(root.path().to_path_buf()));
    assembled.use_etc();

    ensure!(built == assembled, "builder and mutator must produce equal selectors");
    ensure!(built.places().len() == 2, "duplicate registration must collapse");
    Ok(())
}

#[rstest]
fn empty_filename_never_resolves(temp_dir: Result<TempDir>) -> Result<()> {
    let root = temp_dir?;
    let selector = ConfigFileSelector::new("", [LookupPlace::Path(root.path().to_path_buf())]);
    let err = match selector.select_first_known_place() {
        Ok(path) => anyhow::bail!("an empty filename must not resolve, found {path:?}"),
        Err(err) => err,
    };
    ensure!(err.is_not_found(), "expected a not-found failure, found {err:?}");
    Ok(())
}

#[rstest]
#[serial]
fn absolute_override_skips_the_configured_search(
    #[from(temp_dir)] configured: Result<TempDir>,
    #[from(temp_dir)] elsewhere: Result<TempDir>,
) -> Result<()> {
    let configured = configured?;
    let elsewhere = elsewhere?;
    std::fs::write(configured.path().join("app.conf"), "key = configured\n")
        .context("write configured config")?;
    let override_path: PathBuf = elsewhere.path().join("pinned.conf");
    std::fs::write(&override_path, "key = pinned\n").context("write override config")?;

    let selector = ConfigFileSelector::new(
        "app.conf",
        [LookupPlace::Path(configured.path().to_path_buf())],
    );
    let selection = selector.select_path(
        override_path
            .to_str()
            .context("override path is valid UTF-8")?,
    )?;
    ensure!(
        selection.path == override_path,
        "expected the absolute override returned as-is, found {:?}",
        selection.path
    );
    Ok(())
}
