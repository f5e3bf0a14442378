//! Section definitions - declarative data for every built-in section.
//!
//! Each section describes which blobs it owns, not how they are matched.
//! Within a family the HAL section comes first, then its configs, calibration
//! and firmware catch-alls, so a broad folder rule never steals a file a
//! narrower interface or library rule should own.
//!
//! # Organization
//!
//! Families are listed alphabetically and [`ALL`] fixes the registration
//! order, which is also the classification priority.
//!
//! Patterns match the whole partition-relative path. A pattern meant as a
//! prefix must end in `.*`, otherwise it needs an explicit suffix such as
//! `\.so`.

use super::Section;

// =============================================================================
// Atrace
// =============================================================================

pub static ATRACE: Section = Section {
    name: "Atrace",
    interfaces: &["android.hardware.atrace"],
    ..Section::EMPTY
};

// =============================================================================
// Audio
// =============================================================================

pub static AUDIO: Section = Section {
    name: "Audio",
    interfaces: &[
        "android.hardware.audio",
        "android.hardware.audio.common",
        "android.hardware.audio.effect",
        "vendor.mediatek.hardware.audio",
        "vendor.oplus.hardware.binaural_record",
        "vendor.oplus.hardware.virtual_device.audio",
        "vendor.qti.hardware.audiohalext",
    ],
    hardware_modules: &[
        "audio.binaural_record",
        "audio.primary",
        "audio.r_submix",
        "audio.usb",
        "audio.virtual",
    ],
    properties_prefixes: &[
        ("aaudio.", false),
        ("af.fast_track_multiplier", true),
        ("audio.", false),
        ("persist.audio.", false),
        ("persist.vendor.audio.", false),
        ("ro.audio.", false),
        ("ro.qc.sdk.audio.", false),
        ("ro.vendor.audio.", false),
        ("tunnel.audio.", false),
        ("use.voice.path.for.pcm.voip", true),
        ("vendor.audio.", false),
        ("vendor.audio_hal.", false),
        ("vendor.voice.path.for.pcm.voip", true),
    ],
    ..Section::EMPTY
};

pub static AUDIO_FX_MODULES: Section = Section {
    name: "Audio (FX modules)",
    folders: &["lib/soundfx", "lib64/soundfx"],
    ..Section::EMPTY
};

pub static AUDIO_CONFIGS: Section = Section {
    name: "Audio configs",
    filenames: &[
        "audio_io_policy.conf",
        "audio_tuning_mixer.txt",
        "default_volume_tables.xml",
    ],
    folders: &["etc/audio"],
    patterns: &[
        r"etc/audio_configs.*\.xml",
        r"etc/audio_effects.*\.(conf|xml)",
        r"etc/audio_platform_info.*\.xml",
        r"etc/.*audio_policy.*\.xml",
        r"etc/mixer_paths.*\.xml",
        r"etc/sound_trigger_.*\.xml",
    ],
    ..Section::EMPTY
};

pub static AUDIO_CALIBRATION: Section = Section {
    name: "Audio calibration",
    folders: &[
        "etc/audio_param",
        "etc/lvacfs_params",
        "etc/smartpa_param",
        "etc/spatializer",
    ],
    patterns: &[r"(.*/)?firmware/tfa98xx\..*"],
    ..Section::EMPTY
};

// =============================================================================
// Authsecret
// =============================================================================

pub static AUTHSECRET: Section = Section {
    name: "Authsecret",
    interfaces: &["android.hardware.authsecret"],
    ..Section::EMPTY
};

// =============================================================================
// Camera
// =============================================================================

pub static CAMERA: Section = Section {
    name: "Camera",
    interfaces: &[
        "android.hardware.camera.common",
        "android.hardware.camera.device",
        "android.hardware.camera.metadata",
        "android.hardware.camera.provider",
        "camera.device",
        "motorola.hardware.camera.imgtuner",
        "vendor.mediatek.hardware.camera.atms",
        "vendor.mediatek.hardware.camera.bgservice",
        "vendor.mediatek.hardware.camera.device",
        "vendor.mediatek.hardware.camera.frhandler",
        "vendor.mediatek.hardware.camera.isphal",
        "vendor.mediatek.hardware.camera.lomoeffect",
        "vendor.mediatek.hardware.camera.postproc",
        "vendor.mediatek.hardware.camera.security",
        "vendor.oplus.hardware.camera_rfi",
        "vendor.oplus.hardware.cammidasservice",
        "vendor.oplus.hardware.extcamera",
        "vendor.oplus.hardware.virtual_device.camera.hal",
        "vendor.oplus.hardware.virtual_device.camera.manager",
        "vendor.oplus.hardware.virtual_device.camera.provider",
        "vendor.qti.camera.provider",
        "vendor.qti.hardware.camera.device",
        "vendor.qti.hardware.camera.offlinecamera",
        "vendor.qti.hardware.camera.postproc",
        "vendor.qti.hardware.scve.objecttracker",
        "vendor.qti.hardware.scve.panorama",
        "vendor.qti.hardware.seccam",
    ],
    hardware_modules: &["camera", "com.qti.chi"],
    binaries: &["camerahalserver", "mm-qcamera-daemon", "virtualcameraprovider"],
    libraries: &[
        "libscveBlobDescriptor_stub",
        "libscveCommon",
        "libscveCommon_stub",
        "libscveObjectSegmentation",
        "libscveObjectSegmentation_stub",
        "libscveObjectTracker",
        "libscveObjectTracker_stub",
        "libscvePanorama",
        "libscvePanorama_lite",
        "libscvePanorama_stub",
    ],
    folders: &["lib/camera", "lib64/camera"],
    patterns: &[
        r"lib(64)?/com.qti.feature2\..*\.so",
        r"lib(64)?/libCamera_.*\.so",
        r"lib(64)?/libactuator_.*\.so",
        r"lib(64)?/libarcsoft_.*\.so",
        r"lib(64)?/libcamx.*\.so",
        r"lib(64)?/libchromatix_.*\.so",
        r"lib(64)?/libmmcamera_.*\.so",
        r"lib(64)?/libmmcamera2_.*\.so",
        r"lib(64)?/libmtkcam_.*\.so",
        r"lib(64)?/libois_.*\.so",
    ],
    properties_prefixes: &[
        ("camera.", false),
        ("persist.vendor.camera.", false),
        ("vendor.camera.", false),
    ],
    ..Section::EMPTY
};

pub static CAMERA_CONFIGS: Section = Section {
    name: "Camera configs",
    folders: &["camera", "etc/camera"],
    ..Section::EMPTY
};

pub static CAMERA_FIRMWARE: Section = Section {
    name: "Camera firmware",
    patterns: &[
        r"(.*/)?firmware/CAMERA_ICP.*",
        r"bin/lib3a.*",
        r"bin/libccu_.*",
        r"firmware/lib3a.*",
        r"firmware/libccu_.*",
    ],
    ..Section::EMPTY
};

pub static CAMERA_MOTOR: Section = Section {
    name: "Camera motor",
    interfaces: &["vendor.xiaomi.hardware.motor"],
    libraries: &["mi.motor.daemon"],
    folders: &["etc/step_motor"],
    patterns: &[r"lib(64)?/libmivendor_module_.*\.so"],
    ..Section::EMPTY
};

// =============================================================================
// Dolby
// =============================================================================

pub static DOLBY: Section = Section {
    name: "Dolby",
    interfaces: &["vendor.dolby.hardware.dms"],
    libraries: &["libdapparamstorage", "libdeccfg"],
    folders: &["etc/dolby"],
    ..Section::EMPTY
};

// =============================================================================
// GNSS
// =============================================================================

pub static GNSS: Section = Section {
    name: "GNSS",
    interfaces: &["android.hardware.gnss", "vendor.qti.gnss"],
    binaries: &[
        "loc_launcher",
        "lowi-server",
        "slim_daemon",
        "xtra-daemon",
        "xtwifi-client",
        "xtwifi-inet-agent",
    ],
    ..Section::EMPTY
};

// =============================================================================
// Light
// =============================================================================

pub static LIGHT: Section = Section {
    name: "Light",
    interfaces: &["android.hardware.light"],
    hardware_modules: &["lights"],
    ..Section::EMPTY
};

// =============================================================================
// Media
// =============================================================================

pub static MEDIA: Section = Section {
    name: "Media",
    interfaces: &[
        "android.hardware.media",
        "android.hardware.media.bufferpool",
        "android.hardware.media.c2",
        "android.hardware.media.omx",
        "vendor.qti.hardware.qconfig",
        "vendor.qti.hardware.vpp",
        "vendor.qti.media.c2",
    ],
    binaries: &["qconfigservice", "vppservice", "vpud"],
    filenames: &["c2_manifest_vendor.xml", "mediacodec.policy"],
    patterns: &[
        r"etc/seccomp_policy/codec2.vendor.*.-arm\.policy",
        r"lib(64)?/libMtkOmx.*\.so",
        r"lib(64)?/libOmx.*\.so",
        r"lib(64)?/libstagefright.*\.so",
    ],
    properties_prefixes: &[("debug.stagefright.", false), ("media.", false)],
    ..Section::EMPTY
};

pub static MEDIA_DOLBY: Section = Section {
    name: "Media (Dolby)",
    interfaces: &[
        "vendor.dolby.dms",
        "vendor.dolby.hardware.dms",
        "vendor.dolby.media.c2",
        "vendor.dolby_sp.hardware.dmssp",
        "vendor.dolby_sp.media.c2",
    ],
    libraries: &["libdapparamstorage", "libdeccfg"],
    filenames: &["dolby_vision.cfg"],
    folders: &["etc/dolby"],
    patterns: &[r"lib(64)?/libdolby.*\.so"],
    properties_prefixes: &[("ro.vendor.dolby.", false)],
    ..Section::EMPTY
};

pub static MEDIA_OZO_AUDIO: Section = Section {
    name: "Media (OZO Audio)",
    interfaces: &["vendor.ozoaudio.media.c2"],
    ..Section::EMPTY
};

pub static MEDIA_CONFIGS: Section = Section {
    name: "Media configs",
    patterns: &[r"etc/media_codecs.*\.xml", r"etc/media_profiles.*\.xml"],
    ..Section::EMPTY
};

// =============================================================================
// Neural networks
// =============================================================================

pub static NEURAL_NETWORKS: Section = Section {
    name: "Neural networks",
    interfaces: &[
        "android.hardware.neuralnetworks",
        "vendor.mediatek.hardware.mmagent",
    ],
    binaries: &["nn_device_test", "npu_launcher"],
    libraries: &["libhexagon_nn_stub"],
    patterns: &[r"lib(64)?/libhta(_.*.)?\.so", r"lib(64)?/unnhal.*.\.so"],
    ..Section::EMPTY
};

// =============================================================================
// Wi-Fi
// =============================================================================

pub static WIFI: Section = Section {
    name: "Wi-Fi",
    interfaces: &[
        "android.hardware.wifi",
        "vendor.mediatek.hardware.wifi.hostapd",
        "vendor.mediatek.hardware.wifi.supplicant",
        "vendor.qti.hardware.wifi.hostapd",
        "vendor.qti.hardware.wifi.keystore",
        "vendor.qti.hardware.wifi.supplicant",
        "vendor.qti.hardware.wifi.wifilearner",
    ],
    binaries: &["hostapd", "wpa_supplicant"],
    ..Section::EMPTY
};

pub static WIFI_CONFIGS: Section = Section {
    name: "Wi-Fi configs",
    folders: &["etc/wifi"],
    ..Section::EMPTY
};

pub static WIFI_FIRMWARE: Section = Section {
    name: "Wi-Fi firmware",
    folders: &["firmware/wigig", "firmware/wlan"],
    ..Section::EMPTY
};

/// Every built-in section, in registration order.
pub static ALL: &[&Section] = &[
    &ATRACE,
    &AUDIO,
    &AUDIO_FX_MODULES,
    &AUDIO_CONFIGS,
    &AUDIO_CALIBRATION,
    &AUTHSECRET,
    &CAMERA,
    &CAMERA_CONFIGS,
    &CAMERA_FIRMWARE,
    &CAMERA_MOTOR,
    &DOLBY,
    &GNSS,
    &LIGHT,
    &MEDIA,
    &MEDIA_DOLBY,
    &MEDIA_OZO_AUDIO,
    &MEDIA_CONFIGS,
    &NEURAL_NETWORKS,
    &WIFI,
    &WIFI_CONFIGS,
    &WIFI_FIRMWARE,
];
