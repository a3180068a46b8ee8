//! Well-known class names the processors match against and emit.

use crate::types::ClassName;
use once_cell::sync::Lazy;

// JSR 330.
pub static INJECT: Lazy<ClassName> = Lazy::new(|| ClassName::top_level("javax.inject", "Inject"));
pub static PROVIDER: Lazy<ClassName> =
    Lazy::new(|| ClassName::top_level("javax.inject", "Provider"));
pub static QUALIFIER: Lazy<ClassName> =
    Lazy::new(|| ClassName::top_level("javax.inject", "Qualifier"));

// aj-inject marker annotations.
pub static ASSISTED: Lazy<ClassName> = Lazy::new(|| ClassName::top_level("aj.inject", "Assisted"));
pub static ASSISTED_INJECT: Lazy<ClassName> =
    Lazy::new(|| ClassName::top_level("aj.inject", "AssistedInject"));
pub static ASSISTED_INJECT_FACTORY: Lazy<ClassName> =
    Lazy::new(|| ASSISTED_INJECT.nested("Factory"));
pub static ASSISTED_MODULE: Lazy<ClassName> =
    Lazy::new(|| ClassName::top_level("aj.inject.dagger2", "AssistedModule"));
pub static INFLATION_INJECT: Lazy<ClassName> =
    Lazy::new(|| ClassName::top_level("aj.inject.inflation", "InflationInject"));
pub static INFLATION_MODULE: Lazy<ClassName> =
    Lazy::new(|| ClassName::top_level("aj.inject.inflation", "InflationModule"));
pub static VIEW_FACTORY: Lazy<ClassName> =
    Lazy::new(|| ClassName::top_level("aj.inject.inflation", "ViewFactory"));

// Dagger.
pub static DAGGER_MODULE: Lazy<ClassName> = Lazy::new(|| ClassName::top_level("dagger", "Module"));
pub static DAGGER_BINDS: Lazy<ClassName> = Lazy::new(|| ClassName::top_level("dagger", "Binds"));
pub static INTO_MAP: Lazy<ClassName> =
    Lazy::new(|| ClassName::top_level("dagger.multibindings", "IntoMap"));
pub static STRING_KEY: Lazy<ClassName> =
    Lazy::new(|| ClassName::top_level("dagger.multibindings", "StringKey"));
pub static INSTALL_IN: Lazy<ClassName> =
    Lazy::new(|| ClassName::top_level("dagger.hilt", "InstallIn"));
pub static DISABLE_INSTALL_IN_CHECK: Lazy<ClassName> =
    Lazy::new(|| ClassName::top_level("dagger.hilt.migration", "DisableInstallInCheck"));

// Android.
pub static VIEW: Lazy<ClassName> = Lazy::new(|| ClassName::top_level("android.view", "View"));
pub static CONTEXT: Lazy<ClassName> =
    Lazy::new(|| ClassName::top_level("android.content", "Context"));
pub static ATTRIBUTE_SET: Lazy<ClassName> =
    Lazy::new(|| ClassName::top_level("android.util", "AttributeSet"));

// Standard markers.
pub static GENERATED: Lazy<ClassName> =
    Lazy::new(|| ClassName::top_level("javax.annotation.processing", "Generated"));
pub static OVERRIDE: Lazy<ClassName> =
    Lazy::new(|| ClassName::top_level("java.lang", "Override"));
