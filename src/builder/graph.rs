//! Build graph emission.
//!
//! Turns the discovered sources into a ninja description with two rules
//! (`cc` and `link`), one compile statement per source, and a single link
//! statement producing the tutorial executable.

use crate::builder::ninja::{escape_variable, ninja_path, BuildDescription, BuildStatement, Rule};
use crate::core::{BuildConfig, PlatformProfile, SourceFile};
use crate::util::Config;

/// Name of the compile rule.
pub const COMPILE_RULE: &str = "cc";

/// Name of the link rule.
pub const LINK_RULE: &str = "link";

/// Flags every compile gets.
const BASE_CFLAGS: &str = "-g -Wall -Werror -Wno-unused-function";

/// Flags added for optimized builds.
const OPTIMIZE_CFLAGS: &str = "-O2 -DNDEBUG";

/// Compile flags in override order: base, optimization, platform.
pub fn compile_flags(config: &BuildConfig, profile: &PlatformProfile, settings: &Config) -> String {
    let include = format!(
        "-I {}",
        escape_variable(&ninja_path(&settings.backend.include_dir))
    );
    let mut flags = vec![BASE_CFLAGS, include.as_str()];

    if config.optimize {
        flags.push(OPTIMIZE_CFLAGS);
    }

    if !profile.extra_compile_flags.is_empty() {
        flags.push(&profile.extra_compile_flags);
    }

    flags.join(" ")
}

/// Link flags: only what the platform adds.
pub fn link_flags(profile: &PlatformProfile) -> String {
    profile.extra_link_flags.clone()
}

/// Final executable name including the platform suffix.
pub fn executable_name(profile: &PlatformProfile, settings: &Config) -> String {
    format!("{}{}", settings.layout.executable, profile.executable_suffix)
}

/// Produce the build description.
///
/// Pure: identical arguments give an identical description, statement for
/// statement, in the order of `sources`.
pub fn emit(
    config: &BuildConfig,
    profile: &PlatformProfile,
    settings: &Config,
    sources: &[SourceFile],
) -> BuildDescription {
    let cc = &settings.toolchain.cc;
    let mut desc = BuildDescription::new();

    desc.set_header("Generated by tutorial-build. Rewritten on every run; do not edit.");

    desc.variable("cflags", compile_flags(config, profile, settings));
    desc.variable("ldflags", link_flags(profile));

    desc.rule(
        Rule::new(
            COMPILE_RULE,
            format!("{} $in $cflags -MD -MF $out.d -c -o $out", cc),
        )
        .depfile("$out.d")
        .description("CC $in $out"),
    );
    desc.rule(
        Rule::new(LINK_RULE, format!("{} $in $ldflags -g -o $out", cc)).description("LINK $out"),
    );

    let mut objects = Vec::with_capacity(sources.len());
    for source in sources {
        let object = ninja_path(&source.object_path(&settings.layout.object_dir));
        desc.build(BuildStatement::new(object.clone(), COMPILE_RULE).input(ninja_path(source.path())));
        objects.push(object);
    }

    desc.build(
        BuildStatement::new(executable_name(profile, settings), LINK_RULE)
            .inputs(objects)
            .input(ninja_path(&settings.backend.artifact)),
    );

    desc
}
