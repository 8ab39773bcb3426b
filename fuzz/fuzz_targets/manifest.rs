#![no_main]

use docproxy::{GeneratorConfig, Manifest, ProxyFactory, Target};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Convert bytes to UTF-8 string (ignore invalid UTF-8)
    if let Ok(s) = std::str::from_utf8(data) {
        // Any manifest that loads must generate or fail cleanly, for both targets
        if let Ok(registry) = Manifest::from_json(s).and_then(Manifest::into_registry) {
            for target in [Target::Php, Target::Rust] {
                let _ = ProxyFactory::new(GeneratorConfig::new().with_target(target)).generate_all(&registry);
            }
        }
    }
});
