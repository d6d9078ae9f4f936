use std::process::Command;

/// Values baked into the client bundle with `option_env!`
const BUILD_TIME_VARS: [&str; 4] = [
    "PORTFOLIO_EMAILJS_SERVICE_ID",
    "PORTFOLIO_EMAILJS_TEMPLATE_ID",
    "PORTFOLIO_EMAILJS_PUBLIC_KEY",
    "PORTFOLIO_CONTACT_EMAIL",
];

fn git(args: &[&str]) -> String {
    Command::new("git")
        .args(args)
        .output()
        .ok()
        .and_then(|o| String::from_utf8(o.stdout).ok())
        .map(|s| s.trim().to_string())
        .unwrap_or_default()
}

fn main() {
    println!("cargo::rerun-if-changed=.git/HEAD");
    println!("cargo::rerun-if-changed=.git/refs/heads");
    for var in BUILD_TIME_VARS {
        println!("cargo::rerun-if-env-changed={var}");
    }

    let revision = git(&["rev-parse", "HEAD"]);
    let branch = git(&["rev-parse", "--abbrev-ref", "HEAD"]);

    println!("cargo::rustc-env=VCS_REF_HEAD_REVISION={revision}");
    println!("cargo::rustc-env=VCS_REF_HEAD_NAME={branch}");
}
