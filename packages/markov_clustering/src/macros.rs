// Copyright (c) Microsoft Corporation.
// Licensed under the MIT license.

#[macro_export]
macro_rules! log {
    ($message:expr) => {{
        #[cfg(feature = "logging")]
        {
            use chrono::Local;
            println!("{}: {}", Local::now().format("%H:%M:%S%.3f"), $message);
        }
    }};
    ($fmt:expr, $($args:tt)*) => {{
        #[cfg(feature = "logging")]
        {
            use chrono::Local;
            let message = format!($fmt, $($args)*);
            println!("{}: {}", Local::now().format("%H:%M:%S%.3f"), message);
        }
    }};
}
