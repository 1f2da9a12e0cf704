use base_codec::CodecRegistry;

pub fn handle(config: &CodecRegistry) -> Result<(), Box<dyn std::error::Error>> {
    let default = config.settings.default_codec.as_deref();

    println!("Available codecs:\n");
    for name in config.names() {
        let Some(profile) = config.get_codec(name) else {
            continue;
        };
        let marker = if Some(name) == default { "*" } else { " " };
        println!(
            "{marker} {:<16} {:<7} {}",
            name,
            profile.scheme,
            profile.description.as_deref().unwrap_or("")
        );
    }
    Ok(())
}
