//! The external collaborators a lifecycle drives

use crate::domain::ports::{Archiver, Compiler, Installer, LocalRunner, PlatformClient};

/// One implementation per port
pub struct Collaborators {
    pub compiler: Box<dyn Compiler>,
    pub installer: Box<dyn Installer>,
    pub archiver: Box<dyn Archiver>,
    pub platform: Box<dyn PlatformClient>,
    pub runner: Box<dyn LocalRunner>,
}
