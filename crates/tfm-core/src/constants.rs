//! Well-known framework identifiers and special names.

/// Identifiers of the three sentinel frameworks.
pub mod special {
    pub const ANY: &str = "Any";
    pub const AGNOSTIC: &str = "Agnostic";
    pub const UNSUPPORTED: &str = "Unsupported";
}

/// Long-form framework family identifiers.
pub mod identifiers {
    pub const NET_PLATFORM: &str = ".NETPlatform";
    pub const NET: &str = ".NETFramework";
    pub const NET_CORE: &str = ".NETCore";
    pub const NET_STANDARD: &str = ".NETStandard";
    pub const NET_STANDARD_APP: &str = ".NETStandardApp";
    pub const NET_CORE_APP: &str = ".NETCoreApp";
    pub const NET_MICRO: &str = ".NETMicroFramework";
    pub const WINRT: &str = "WinRT";
    pub const SILVERLIGHT: &str = "Silverlight";
    pub const WINDOWS: &str = "Windows";
    pub const WINDOWS_PHONE: &str = "WindowsPhone";
    pub const WINDOWS_PHONE_APP: &str = "WindowsPhoneApp";
    pub const DNX: &str = "DNX";
    pub const DNX_CORE: &str = "DNXCore";
    pub const ASP_NET: &str = "ASP.NET";
    pub const ASP_NET_CORE: &str = "ASP.NETCore";
    pub const PORTABLE: &str = ".NETPortable";
    pub const UAP: &str = "UAP";
    pub const NATIVE: &str = "native";
    pub const TIZEN: &str = "Tizen";

    pub const MONO_ANDROID: &str = "MonoAndroid";
    pub const MONO_TOUCH: &str = "MonoTouch";
    pub const MONO_MAC: &str = "MonoMac";
    pub const XAMARIN_IOS: &str = "Xamarin.iOS";
    pub const XAMARIN_MAC: &str = "Xamarin.Mac";
    pub const XAMARIN_PLAYSTATION3: &str = "Xamarin.PlayStation3";
    pub const XAMARIN_PLAYSTATION4: &str = "Xamarin.PlayStation4";
    pub const XAMARIN_PLAYSTATION_VITA: &str = "Xamarin.PlayStationVita";
    pub const XAMARIN_WATCH_OS: &str = "Xamarin.WatchOS";
    pub const XAMARIN_TV_OS: &str = "Xamarin.TVOS";
    pub const XAMARIN_XBOX360: &str = "Xamarin.Xbox360";
    pub const XAMARIN_XBOX_ONE: &str = "Xamarin.XboxOne";
}

/// Separator between member frameworks of a portable profile.
pub const PORTABLE_MEMBER_SEPARATOR: char = '+';

/// Environment variable consulted by [`crate::tracing::init_tracing`].
pub const LOG_ENV_VAR: &str = "TFM_LOG";

/// Default log filter when neither config nor environment sets one.
pub const DEFAULT_LOG_LEVEL: &str = "warn";
