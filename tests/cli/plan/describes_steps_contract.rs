use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn plan_app_lists_default_steps() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["plan", "app"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1. wait-for-db: python manage.py wait_for_db"))
        .stdout(predicate::str::contains("2. collect-static: python manage.py collectstatic --noinput"))
        .stdout(predicate::str::contains("3. migrate: python manage.py migrate"))
        .stdout(predicate::str::contains(
            "4. serve (hand-off): uwsgi --socket :9000 --workers 4 --master --enable-threads --module app.wsgi",
        ));

    assert!(ctx.invocations().is_empty());
}

#[test]
fn plan_gateway_as_json() {
    let ctx = TestContext::new();

    let output = ctx.cli().args(["p", "gateway", "--json"]).output().unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["bootstrapper"], "gateway");
    assert_eq!(value["steps"][0]["label"], "render-config");
    assert_eq!(value["steps"][1]["command"], "nginx -g 'daemon off;'");
    assert_eq!(value["steps"][1]["kind"], "hand_off");
}

#[test]
fn plan_reflects_config_file() {
    let ctx = TestContext::new();
    let config = ctx.write_config("[app.server]\nmodule = \"recipes.wsgi\"\nworkers = 8\n");

    ctx.cli()
        .arg("-c")
        .arg(&config)
        .args(["plan", "app"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--workers 8"))
        .stdout(predicate::str::contains("--module recipes.wsgi"));
}
