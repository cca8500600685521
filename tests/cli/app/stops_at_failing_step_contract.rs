use crate::harness::TestContext;
use predicates::prelude::*;
use serial_test::serial;

#[test]
#[serial]
fn database_wait_failure_runs_nothing_else() {
    let ctx = TestContext::new();
    let manage = ctx.fake_manage(&[("wait_for_db", 3)]);
    let server = ctx.fake_tool("uwsgi", 0);
    let config = ctx.app_config(&manage, &server);

    ctx.cli()
        .arg("--config")
        .arg(&config)
        .arg("app")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Step 'wait-for-db' failed with exit code 3"));

    assert_eq!(ctx.invocations(), ["manage wait_for_db"]);
}

#[test]
#[serial]
fn collect_static_failure_skips_migrate_and_server() {
    let ctx = TestContext::new();
    let manage = ctx.fake_manage(&[("collectstatic", 5)]);
    let server = ctx.fake_tool("uwsgi", 0);
    let config = ctx.app_config(&manage, &server);

    ctx.cli().arg("--config").arg(&config).arg("app").assert().code(5);

    assert_eq!(ctx.invocations(), ["manage wait_for_db", "manage collectstatic --noinput"]);
}

#[test]
#[serial]
fn migrate_failure_skips_server() {
    let ctx = TestContext::new();
    let manage = ctx.fake_manage(&[("migrate", 9)]);
    let server = ctx.fake_tool("uwsgi", 0);
    let config = ctx.app_config(&manage, &server);

    ctx.cli().arg("--config").arg(&config).arg("app").assert().code(9);

    let invocations = ctx.invocations();
    assert_eq!(invocations.last().map(String::as_str), Some("manage migrate"));
    assert!(invocations.iter().all(|line| !line.starts_with("uwsgi")));
}

#[test]
#[serial]
fn rerunning_after_success_repeats_idempotent_steps() {
    let ctx = TestContext::new();
    let manage = ctx.fake_manage(&[]);
    let server = ctx.fake_tool("uwsgi", 0);
    let config = ctx.app_config(&manage, &server);

    ctx.cli().arg("--config").arg(&config).arg("app").assert().success();
    ctx.cli().arg("--config").arg(&config).arg("app").assert().success();

    let invocations = ctx.invocations();
    assert_eq!(invocations.len(), 8);
    assert_eq!(invocations[..4], invocations[4..]);
}

#[test]
fn malformed_config_exits_before_any_step() {
    let ctx = TestContext::new();
    let config = ctx.write_config("[app.server]\nworkers = 0\n");

    ctx.cli()
        .arg("--config")
        .arg(&config)
        .arg("app")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("workers must be greater than 0"));

    assert!(ctx.invocations().is_empty());
}
