//! Lifecycle hooks of the package manager and the operation each one triggers.

use crate::generate::{GenerateOutput, GenerateTarget, run_generate};
use crate::sink::VersionSink;
use pkgversions_domain::LockSource;
use pkgversions_types::ids;
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LifecycleEvent {
    PostInstallCmd,
    PostUpdateCmd,
}

/// Work performed in response to a lifecycle event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    DumpVersions,
}

impl LifecycleEvent {
    pub const ALL: [LifecycleEvent; 2] = [
        LifecycleEvent::PostInstallCmd,
        LifecycleEvent::PostUpdateCmd,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            LifecycleEvent::PostInstallCmd => ids::EVENT_POST_INSTALL_CMD,
            LifecycleEvent::PostUpdateCmd => ids::EVENT_POST_UPDATE_CMD,
        }
    }

    pub fn operation(self) -> Operation {
        match self {
            LifecycleEvent::PostInstallCmd | LifecycleEvent::PostUpdateCmd => {
                Operation::DumpVersions
            }
        }
    }
}

impl fmt::Display for LifecycleEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LifecycleEvent {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "post-install-cmd" | "post-install" => Ok(LifecycleEvent::PostInstallCmd),
            "post-update-cmd" | "post-update" => Ok(LifecycleEvent::PostUpdateCmd),
            other => anyhow::bail!(
                "unknown lifecycle event: {other} (expected post-install-cmd or post-update-cmd)"
            ),
        }
    }
}

/// Every event this tool listens to, with the operation it maps to.
pub fn subscribed_events() -> [(LifecycleEvent, Operation); 2] {
    LifecycleEvent::ALL.map(|event| (event, event.operation()))
}

/// Run the operation subscribed to `event`.
pub fn dispatch(
    event: LifecycleEvent,
    source: &dyn LockSource,
    target: &GenerateTarget,
    sink: &mut dyn VersionSink,
) -> anyhow::Result<GenerateOutput> {
    match event.operation() {
        Operation::DumpVersions => {
            tracing::info!(%event, "Generating version class...");
            let output = run_generate(source, target, sink)?;
            tracing::info!(
                %event,
                packages = output.mapping.len(),
                target = %output.target,
                "...done generating version class"
            );
            Ok(output)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::tests::MemorySink;
    use camino::Utf8PathBuf;
    use pkgversions_domain::{PackageDescriptor, RootPackage, StaticLockSource};
    use pkgversions_types::LockData;

    #[test]
    fn both_hooks_map_to_dump_versions() {
        assert_eq!(
            subscribed_events(),
            [
                (LifecycleEvent::PostInstallCmd, Operation::DumpVersions),
                (LifecycleEvent::PostUpdateCmd, Operation::DumpVersions),
            ]
        );
    }

    #[test]
    fn parses_and_displays_event_names() {
        for event in LifecycleEvent::ALL {
            let parsed: LifecycleEvent = event.to_string().parse().expect("round trip");
            assert_eq!(parsed, event);
        }
        assert_eq!(
            "post-update".parse::<LifecycleEvent>().expect("short name"),
            LifecycleEvent::PostUpdateCmd
        );
        assert!("pre-install-cmd".parse::<LifecycleEvent>().is_err());
    }

    #[test]
    fn dispatch_generates_for_each_event() {
        let source = StaticLockSource::new(
            LockData::default(),
            PackageDescriptor::from(RootPackage::new("acme/app", "1.0.0", "")),
        );
        let target = GenerateTarget {
            vendor_dir: Utf8PathBuf::from("vendor"),
            self_package: "ocramius/package-versions".to_string(),
            output: None,
        };

        for event in LifecycleEvent::ALL {
            let mut sink = MemorySink::default();
            let output = dispatch(event, &source, &target, &mut sink).expect("dispatch");
            assert_eq!(sink.writes.len(), 1);
            assert_eq!(output.mapping.len(), 1);
        }
    }
}
