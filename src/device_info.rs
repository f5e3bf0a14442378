//! Device identity derived from the merged build properties.

use serde::Serialize;

use crate::props::BuildProp;

/// Fallback for properties the dump does not set.
const UNKNOWN: &str = "unknown";

/// Look up a `ro.product.*` value across the partition-specific variants.
fn product_prop(props: &BuildProp, field: &str) -> Option<String> {
    let keys: Vec<String> = ["", "vendor.", "odm.", "product.", "system.", "system_ext."]
        .iter()
        .map(|partition| format!("ro.product.{partition}{field}"))
        .collect();
    let keys: Vec<&str> = keys.iter().map(String::as_str).collect();
    props.get_first(&keys).map(str::to_string)
}

/// Look up a `ro.build.*` value, falling back to the partition-specific variants.
fn build_prop(props: &BuildProp, field: &str) -> Option<String> {
    let keys: Vec<String> = ["", "vendor.", "system.", "odm."]
        .iter()
        .map(|partition| {
            if partition.is_empty() {
                format!("ro.build.{field}")
            } else {
                format!("ro.{partition}build.{field}")
            }
        })
        .collect();
    let keys: Vec<&str> = keys.iter().map(String::as_str).collect();
    props.get_first(&keys).map(str::to_string)
}

/// Identity of the dumped device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeviceInfo {
    pub codename: String,
    pub manufacturer: String,
    pub brand: String,
    pub model: String,
    pub platform_version: String,
    pub sdk_version: String,
    pub build_id: String,
    pub build_incremental: String,
    pub build_type: String,
    pub build_tags: String,
    pub build_fingerprint: String,
    pub build_description: String,
    /// The device uses A/B (seamless) updates.
    pub device_is_ab: bool,
}

impl DeviceInfo {
    pub fn new(props: &BuildProp) -> Self {
        let or_unknown = |value: Option<String>| value.unwrap_or_else(|| UNKNOWN.to_string());

        let codename = or_unknown(
            product_prop(props, "device").or_else(|| props.get("ro.build.product").map(str::to_string)),
        );
        let platform_version = or_unknown(build_prop(props, "version.release"));
        let build_id = or_unknown(build_prop(props, "id"));
        let build_incremental = or_unknown(build_prop(props, "version.incremental"));
        let build_type = or_unknown(build_prop(props, "type"));
        let build_tags = or_unknown(build_prop(props, "tags"));

        let build_description = props
            .get("ro.build.description")
            .map(str::to_string)
            .unwrap_or_else(|| {
                format!("{codename}-{build_type} {platform_version} {build_id} {build_incremental} {build_tags}")
            });

        Self {
            manufacturer: or_unknown(product_prop(props, "manufacturer")).to_lowercase(),
            brand: or_unknown(product_prop(props, "brand")),
            model: or_unknown(product_prop(props, "model")),
            sdk_version: or_unknown(build_prop(props, "version.sdk")),
            build_fingerprint: or_unknown(build_prop(props, "fingerprint")),
            device_is_ab: props.get("ro.build.ab_update") == Some("true"),
            codename,
            platform_version,
            build_id,
            build_incremental,
            build_type,
            build_tags,
            build_description,
        }
    }
}
