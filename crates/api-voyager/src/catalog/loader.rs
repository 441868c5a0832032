use std::path::Path;

use fmmap::tokio::{AsyncMmapFile, AsyncMmapFileExt};

use super::Catalog;

pub struct CatalogLoader {
  file: AsyncMmapFile,
}

impl CatalogLoader {
  pub async fn open(path: &Path) -> anyhow::Result<Self> {
    let file = AsyncMmapFile::open(path).await?;
    Ok(Self { file })
  }

  pub fn parse(&self) -> anyhow::Result<Catalog> {
    Ok(serde_json::from_slice::<Catalog>(self.file.as_slice())?)
  }
}
