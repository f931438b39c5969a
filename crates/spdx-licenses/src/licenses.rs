// This file is generated by spdx-gen, any edits to this file will be discarded.
// Regenerate it with `cargo run -p spdx-gen-cli`.

use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;

/// Marker for a license that is not on the SPDX list.
pub const NONSTANDARD: &str = "Nonstandard";

/// Pattern fragment accepting private `LicenseRef-` references.
pub const LICENSE_REF: &str = "LicenseRef-.+";

/// Software Package Data Exchange (SPDX) standard open-source software
/// license identifiers.
pub const LICENSE_IDENTIFIERS: &[&str] = &[
    "0BSD",
    "AFL-3.0",
    "AGPL-3.0",
    "AGPL-3.0-only",
    "AGPL-3.0-or-later",
    "Apache-1.0",
    "Apache-1.1",
    "Apache-2.0",
    "Artistic-1.0",
    "Artistic-2.0",
    "BSD-1-Clause",
    "BSD-2-Clause",
    "BSD-2-Clause-Patent",
    "BSD-3-Clause",
    "BSD-3-Clause-Clear",
    "BSD-4-Clause",
    "BSL-1.0",
    "Beerware",
    "BlueOak-1.0.0",
    "CC-BY-3.0",
    "CC-BY-4.0",
    "CC-BY-SA-3.0",
    "CC-BY-SA-4.0",
    "CC0-1.0",
    "CDDL-1.0",
    "CECILL-2.1",
    "ECL-2.0",
    "EPL-1.0",
    "EPL-2.0",
    "EUPL-1.1",
    "EUPL-1.2",
    "GPL-1.0",
    "GPL-1.0+",
    "GPL-1.0-only",
    "GPL-1.0-or-later",
    "GPL-2.0",
    "GPL-2.0+",
    "GPL-2.0-only",
    "GPL-2.0-or-later",
    "GPL-3.0",
    "GPL-3.0+",
    "GPL-3.0-only",
    "GPL-3.0-or-later",
    "HPND",
    "ISC",
    "JSON",
    "LGPL-2.0",
    "LGPL-2.0+",
    "LGPL-2.0-only",
    "LGPL-2.0-or-later",
    "LGPL-2.1",
    "LGPL-2.1+",
    "LGPL-2.1-only",
    "LGPL-2.1-or-later",
    "LGPL-3.0",
    "LGPL-3.0+",
    "LGPL-3.0-only",
    "LGPL-3.0-or-later",
    "LPPL-1.3c",
    "MIT",
    "MIT-0",
    "MIT-CMU",
    "MPL-1.0",
    "MPL-1.1",
    "MPL-2.0",
    "MS-PL",
    "NCSA",
    "OFL-1.1",
    "OSL-3.0",
    "OpenSSL",
    "PostgreSQL",
    "Python-2.0",
    "Ruby",
    "Sleepycat",
    "UPL-1.0",
    "Unicode-3.0",
    "Unicode-DFS-2015",
    "Unicode-DFS-2016",
    "Unlicense",
    "Vim",
    "W3C",
    "WTFPL",
    "X11",
    "Zlib",
    "bzip2-1.0.6",
    "curl",
    "libpng-2.0",
    "zlib-acknowledgement",
];

/// SPDX exception identifiers, valid after `WITH`.
pub const EXCEPTION_IDENTIFIERS: &[&str] = &[
    "389-exception",
    "Autoconf-exception-3.0",
    "Bison-exception-2.2",
    "Classpath-exception-2.0",
    "GCC-exception-2.0",
    "GCC-exception-3.1",
    "LLVM-exception",
    "Linux-syscall-note",
    "OpenJDK-assembly-exception-1.0",
    "Qt-GPL-exception-1.0",
    "Swift-exception",
    "WxWindows-exception-3.1",
    "u-boot-exception-2.0",
];

/// Anchored SPDX license-expression grammar over the identifier lists.
pub const LICENSE_EXPRESSION_PATTERN: &str = concat!(
    "\\A(?:(?:",
    "0BSD",
    "|AFL\\-3\\.0",
    "|AGPL\\-3\\.0",
    "|AGPL\\-3\\.0\\-only",
    "|AGPL\\-3\\.0\\-or\\-later",
    "|Apache\\-1\\.0",
    "|Apache\\-1\\.1",
    "|Apache\\-2\\.0",
    "|Artistic\\-1\\.0",
    "|Artistic\\-2\\.0",
    "|BSD\\-1\\-Clause",
    "|BSD\\-2\\-Clause",
    "|BSD\\-2\\-Clause\\-Patent",
    "|BSD\\-3\\-Clause",
    "|BSD\\-3\\-Clause\\-Clear",
    "|BSD\\-4\\-Clause",
    "|BSL\\-1\\.0",
    "|Beerware",
    "|BlueOak\\-1\\.0\\.0",
    "|CC\\-BY\\-3\\.0",
    "|CC\\-BY\\-4\\.0",
    "|CC\\-BY\\-SA\\-3\\.0",
    "|CC\\-BY\\-SA\\-4\\.0",
    "|CC0\\-1\\.0",
    "|CDDL\\-1\\.0",
    "|CECILL\\-2\\.1",
    "|ECL\\-2\\.0",
    "|EPL\\-1\\.0",
    "|EPL\\-2\\.0",
    "|EUPL\\-1\\.1",
    "|EUPL\\-1\\.2",
    "|GPL\\-1\\.0",
    "|GPL\\-1\\.0\\+",
    "|GPL\\-1\\.0\\-only",
    "|GPL\\-1\\.0\\-or\\-later",
    "|GPL\\-2\\.0",
    "|GPL\\-2\\.0\\+",
    "|GPL\\-2\\.0\\-only",
    "|GPL\\-2\\.0\\-or\\-later",
    "|GPL\\-3\\.0",
    "|GPL\\-3\\.0\\+",
    "|GPL\\-3\\.0\\-only",
    "|GPL\\-3\\.0\\-or\\-later",
    "|HPND",
    "|ISC",
    "|JSON",
    "|LGPL\\-2\\.0",
    "|LGPL\\-2\\.0\\+",
    "|LGPL\\-2\\.0\\-only",
    "|LGPL\\-2\\.0\\-or\\-later",
    "|LGPL\\-2\\.1",
    "|LGPL\\-2\\.1\\+",
    "|LGPL\\-2\\.1\\-only",
    "|LGPL\\-2\\.1\\-or\\-later",
    "|LGPL\\-3\\.0",
    "|LGPL\\-3\\.0\\+",
    "|LGPL\\-3\\.0\\-only",
    "|LGPL\\-3\\.0\\-or\\-later",
    "|LPPL\\-1\\.3c",
    "|MIT",
    "|MIT\\-0",
    "|MIT\\-CMU",
    "|MPL\\-1\\.0",
    "|MPL\\-1\\.1",
    "|MPL\\-2\\.0",
    "|MS\\-PL",
    "|NCSA",
    "|OFL\\-1\\.1",
    "|OSL\\-3\\.0",
    "|OpenSSL",
    "|PostgreSQL",
    "|Python\\-2\\.0",
    "|Ruby",
    "|Sleepycat",
    "|UPL\\-1\\.0",
    "|Unicode\\-3\\.0",
    "|Unicode\\-DFS\\-2015",
    "|Unicode\\-DFS\\-2016",
    "|Unlicense",
    "|Vim",
    "|W3C",
    "|WTFPL",
    "|X11",
    "|Zlib",
    "|bzip2\\-1\\.0\\.6",
    "|curl",
    "|libpng\\-2\\.0",
    "|zlib\\-acknowledgement",
    ")\\+?(?:(?-u:\\s)WITH(?-u:\\s)(?:",
    "389\\-exception",
    "|Autoconf\\-exception\\-3\\.0",
    "|Bison\\-exception\\-2\\.2",
    "|Classpath\\-exception\\-2\\.0",
    "|GCC\\-exception\\-2\\.0",
    "|GCC\\-exception\\-3\\.1",
    "|LLVM\\-exception",
    "|Linux\\-syscall\\-note",
    "|OpenJDK\\-assembly\\-exception\\-1\\.0",
    "|Qt\\-GPL\\-exception\\-1\\.0",
    "|Swift\\-exception",
    "|WxWindows\\-exception\\-3\\.1",
    "|u\\-boot\\-exception\\-2\\.0",
    "))?|Nonstandard|LicenseRef-.+)\\z",
);

static LICENSE_EXPRESSION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(LICENSE_EXPRESSION_PATTERN).expect("generated license pattern compiles")
});

/// Whether `license` is a valid SPDX license expression: a known license
/// identifier with an optional `+` and an optional `WITH` exception, the
/// [`NONSTANDARD`] marker, or a `LicenseRef-` reference.
pub fn is_match(license: &str) -> bool {
    LICENSE_EXPRESSION.is_match(license)
}

/// Closest known license identifiers to `license` by Levenshtein distance.
///
/// Returns `None` when `license` is already a known identifier, or when even
/// the best match needs as many edits as `license` has characters.
pub fn suggestions(license: &str) -> Option<Vec<&'static str>> {
    let mut by_distance: BTreeMap<usize, Vec<&'static str>> = BTreeMap::new();
    for &identifier in LICENSE_IDENTIFIERS {
        by_distance
            .entry(strsim::levenshtein(identifier, license))
            .or_default()
            .push(identifier);
    }

    let (lowest, identifiers) = by_distance.into_iter().next()?;
    if lowest == 0 || lowest >= license.chars().count() {
        return None;
    }
    Some(identifiers)
}
