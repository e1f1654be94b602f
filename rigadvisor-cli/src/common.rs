use std::path::Path;

use anyhow::Context;
use async_trait::async_trait;
use erased_serde::Serializer;
use rigadvisor::{engine::Advisor, schemas::build::Build};
use tokio::io::AsyncReadExt;

#[async_trait]
pub trait Run {
    async fn run(
        &self,
        advisor: &Advisor,
        serializer: &mut (dyn Serializer + Send),
    ) -> anyhow::Result<()>;
}

#[macro_export]
macro_rules! run_impl_enum {
    ($i:ident, $self:ident, $adv:ident, $ser:ident, $b:block) => {
        #[async_trait::async_trait]
        impl $crate::common::Run for $i {
            async fn run(
                &$self,
                $adv: &rigadvisor::engine::Advisor,
                $ser: &mut (dyn erased_serde::Serializer + Send),
            ) -> anyhow::Result<()> {
                $b;

                Ok(())
            }
        }
    }
}

#[macro_export]
macro_rules! run_impl_struct {
    ($i:ident, $b:ident) => {
        #[async_trait::async_trait]
        impl $crate::common::Run for $i {
            async fn run(
                &self,
                advisor: &rigadvisor::engine::Advisor,
                serializer: &mut (dyn erased_serde::Serializer + Send),
            ) -> anyhow::Result<()> {
                self.$b.run(advisor, serializer).await
            }
        }
    };
}

/// Read a build previously printed by `recommend --build-only` or `swap`.
/// A path of `-` reads from stdin.
pub async fn read_build(path: &Path) -> anyhow::Result<Build> {
    let text = if path == Path::new("-") {
        let mut text = String::new();
        tokio::io::stdin()
            .read_to_string(&mut text)
            .await
            .context("could not read build from stdin")?;
        text
    } else {
        tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("could not read build {}", path.display()))?
    };
    serde_json::from_str(&text).context("could not parse build JSON")
}
