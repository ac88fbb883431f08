fn main() {
    // Skip slint-build entirely for headless builds. Cargo exposes enabled
    // features as CARGO_FEATURE_<NAME>.
    if std::env::var_os("CARGO_FEATURE_UI").is_none() {
        return;
    }

    slint_build::compile("ui/app.slint").expect("Failed to compile Slint UI");
}
