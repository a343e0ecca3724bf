use std::io::{self, Stderr, Stdout, Write};

pub struct OtpWriter {
    pub out: Stdout,
    pub err: Stderr,
}

impl OtpWriter {
    pub fn new() -> Self {
        OtpWriter {
            out: io::stdout(),
            err: io::stderr(),
        }
    }
}

pub trait OutErr {
    fn write_err(&mut self, s: &str);
    fn write(&mut self, s: &str);

    // Push buffered output, called once per rendered block
    fn flush(&mut self) {}
}

impl OutErr for OtpWriter {
    fn write_err(&mut self, s: &str) {
        if let Err(e) = self.err.write_all(s.as_bytes()) {
            tracing::error!(error = %e, "failed to write to stderr");
        }
    }

    fn write(&mut self, s: &str) {
        if let Err(e) = self.out.write_all(s.as_bytes()) {
            tracing::error!(error = %e, "failed to write to stdout");
        }
    }

    fn flush(&mut self) {
        if let Err(e) = self.out.flush() {
            tracing::error!(error = %e, "failed to flush stdout");
        }
    }
}
