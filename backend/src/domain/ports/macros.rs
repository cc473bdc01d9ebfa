//! Helper macro for declaring port error enums.
//!
//! Every variant carries named fields and gets a snake-case constructor whose
//! parameters accept anything convertible into the field type. Attributes on
//! fields, such as doc comments, are forwarded to the generated enum:
//!
//! ```ignore
//! define_port_error! {
//!     pub enum StoreError {
//!         Connection {
//!             /// Driver message.
//!             message: String,
//!         } => "connection failed: {message}",
//!     }
//! }
//! let err = StoreError::connection("refused");
//! ```

macro_rules! define_port_error {
    (@ctor $variant:ident ($($params:tt)*) ($($inits:tt)*)) => {
        ::paste::paste! {
            #[doc = concat!("Construct [`Self::", stringify!($variant), "`].")]
            #[must_use]
            pub fn [<$variant:snake>]($($params)*) -> Self {
                Self::$variant { $($inits)* }
            }
        }
    };

    (@ctor $variant:ident ($($params:tt)*) ($($inits:tt)*) $field:ident : $ty:ty, $($rest:tt)*) => {
        define_port_error!(
            @ctor
            $variant
            ($($params)* $field: impl Into<$ty>,)
            ($($inits)* $field: $field.into(),)
            $($rest)*
        );
    };

    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident {
                    $($(#[$field_meta:meta])* $field:ident : $ty:ty),* $(,)?
                } => $message:expr
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant { $($(#[$field_meta])* $field : $ty),* },
            )*
        }

        impl $name {
            $(
                define_port_error!(@ctor $variant () () $( $field : $ty, )*);
            )*
        }
    };
}

pub(crate) use define_port_error;

#[cfg(test)]
mod tests {
    define_port_error! {
        pub enum SamplePortError {
            Offline { message: String } => "offline: {message}",
            Rejected { code: u16 } => "rejected with {code}",
            Partial { message: String, written: u32 } => "partial write of {written}: {message}",
        }
    }

    #[test]
    fn string_fields_accept_str() {
        assert_eq!(SamplePortError::offline("db down").to_string(), "offline: db down");
    }

    #[test]
    fn non_string_fields_keep_their_type() {
        assert_eq!(
            SamplePortError::rejected(409_u16),
            SamplePortError::Rejected { code: 409 }
        );
    }

    #[test]
    fn multiple_fields_are_forwarded_in_order() {
        let err = SamplePortError::partial("disk full", 3_u32);
        assert_eq!(err.to_string(), "partial write of 3: disk full");
    }
}
