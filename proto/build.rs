fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Supply a protoc binary when none is present on the system PATH so the
    // build does not depend on a system-installed protobuf compiler.
    if std::env::var_os("PROTOC").is_none() {
        if let Ok(protoc) = protoc_bin_vendored::protoc_bin_path() {
            std::env::set_var("PROTOC", protoc);
        }
    }

    tonic_build::configure()
        .build_server(true)
        .build_client(true)
        .compile(&["proto/currency/v1/currency.proto"], &["proto"])?;
    Ok(())
}
