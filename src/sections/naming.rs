//! AOSP HAL file naming conventions.
//!
//! Sections declare interface packages (`android.hardware.audio`) and legacy
//! hardware modules (`audio.primary`); these functions decide whether a file
//! basename was produced from one of them.

/// Extensions a file named exactly after an interface may carry.
const INTERFACE_EXTENSIONS: &[&str] = &[".so", ".rc", ".xml"];

/// Whether `name` belongs to interface package `interface`.
///
/// Accepted shapes, with `I` the interface:
/// - `I` itself
/// - `I@<version>...`: HIDL libraries, services and their init/VINTF files
///   (`I@1.0.so`, `I@2.0-service`, `I@2.0-impl.so`)
/// - `I-<suffix>`: AIDL libraries and services (`I-V1-ndk.so`, `I-service.rc`)
/// - `I.service...`: service binaries without a version
/// - `I.so`, `I.rc`, `I.xml`
///
/// A longer package sharing the prefix (`android.hardware.audio.common` for
/// `android.hardware.audio`) does not match.
pub fn matches_interface(name: &str, interface: &str) -> bool {
    let Some(rest) = name.strip_prefix(interface) else {
        return false;
    };

    rest.is_empty()
        || rest.starts_with('@')
        || rest.starts_with('-')
        || rest.starts_with(".service")
        || INTERFACE_EXTENSIONS.contains(&rest)
}

/// Whether `name` is a variant of legacy hardware module `module`.
///
/// The shape is `<module>.<variant>.so` (`audio.primary.lito.so`,
/// `lights.qcom.so`), with a non-empty variant that is not a HIDL version.
pub fn matches_hardware_module(name: &str, module: &str) -> bool {
    name.strip_prefix(module)
        .and_then(|rest| rest.strip_prefix('.'))
        .and_then(|rest| rest.strip_suffix(".so"))
        .is_some_and(|variant| !variant.is_empty() && !variant.contains('@'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidl_shapes() {
        let iface = "vendor.qti.hardware.vpp";
        assert!(matches_interface("vendor.qti.hardware.vpp@1.1.so", iface));
        assert!(matches_interface("vendor.qti.hardware.vpp@1.1-service", iface));
        assert!(matches_interface("vendor.qti.hardware.vpp@1.1-service.rc", iface));
        assert!(matches_interface("vendor.qti.hardware.vpp@1.1-impl.so", iface));
    }

    #[test]
    fn test_aidl_and_service_shapes() {
        let iface = "android.hardware.light";
        assert!(matches_interface("android.hardware.light-V1-ndk.so", iface));
        assert!(matches_interface("android.hardware.light-service.xiaomi", iface));
        assert!(matches_interface("android.hardware.light.xml", iface));
        assert!(matches_interface(
            "android.hardware.audio.service",
            "android.hardware.audio"
        ));
        assert!(matches_interface("android.hardware.light", iface));
    }

    #[test]
    fn test_longer_package_is_not_a_match() {
        let iface = "android.hardware.audio";
        assert!(!matches_interface("android.hardware.audio.common@6.0.so", iface));
        assert!(!matches_interface("android.hardware.audio.effect@6.0.so", iface));
        assert!(!matches_interface("android.hardware.audiox.so", iface));
        assert!(!matches_interface("libandroid.hardware.audio.so", iface));
    }

    #[test]
    fn test_hardware_module_shapes() {
        assert!(matches_hardware_module("audio.primary.default.so", "audio.primary"));
        assert!(matches_hardware_module("audio.primary.lito.so", "audio.primary"));
        assert!(matches_hardware_module("lights.qcom.so", "lights"));
        assert!(matches_hardware_module("com.qti.chi.override.so", "com.qti.chi"));

        assert!(!matches_hardware_module("lights.so", "lights"));
        assert!(!matches_hardware_module("lights.qcom.rc", "lights"));
        assert!(!matches_hardware_module("lightsx.qcom.so", "lights"));
        assert!(!matches_hardware_module("camera.device@1.0-impl.so", "camera"));
    }
}
