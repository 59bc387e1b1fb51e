use crate::core::delivery::DeliveryServiceFactory;
use crate::core::report::compose;
use crate::core::{ConfigProvider, Locale, RunSummary};
use crate::utils::error::Result;
use std::io::{BufRead, Write};

const DEFAULT_CARRIER_KEY: &str = "internal";

fn reports_heading(locale: Locale) -> &'static str {
    match locale {
        Locale::En => "REPORTS",
        Locale::Ru => "ОТЧЁТЫ",
    }
}

fn delivery_heading(locale: Locale) -> &'static str {
    match locale {
        Locale::En => "DELIVERY",
        Locale::Ru => "ДОСТАВКА",
    }
}

fn carrier_prompt(locale: Locale) -> &'static str {
    match locale {
        Locale::En => "Choose a delivery service: internal / yandex / kazpost",
        Locale::Ru => "Выберите службу доставки: internal / yandex / kazpost",
    }
}

/// Runs the report section, then the delivery section, against the given
/// input and output streams.
pub struct Showcase<C: ConfigProvider> {
    config: C,
}

impl<C: ConfigProvider> Showcase<C> {
    pub fn new(config: C) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &C {
        &self.config
    }

    pub fn run<R: BufRead, W: Write>(&self, mut input: R, mut output: W) -> Result<RunSummary> {
        let locale = self.config.locale();

        // 報表
        let report = compose(self.config.report_kind(), self.config.decorations(), locale);
        let report_text = report.generate();
        writeln!(output, "{}", reports_heading(locale))?;
        writeln!(output, "{}", report_text)?;

        // 配送
        writeln!(output)?;
        writeln!(output, "{}", delivery_heading(locale))?;
        let key = match self.config.carrier() {
            Some(key) => key.to_string(),
            None => {
                writeln!(output, "{}", carrier_prompt(locale))?;
                output.flush()?;
                read_carrier_key(&mut input)?
            }
        };

        let service = DeliveryServiceFactory::create(&key, locale);
        let carrier = service.carrier();
        let order_id = self.config.order_id();
        let confirmation = service.deliver_order(order_id);
        writeln!(output, "{}", confirmation)?;
        let status = service.delivery_status(order_id);
        writeln!(output, "{}", status)?;
        output.flush()?;

        tracing::info!("Order {} handed to {} delivery", order_id, carrier);

        Ok(RunSummary {
            report: report_text,
            carrier,
            confirmation,
            status,
        })
    }
}

/// Reads one line; end of input selects the internal carrier. Bytes that
/// are not UTF-8 are replaced, so any line still maps to some key.
fn read_carrier_key<R: BufRead>(input: &mut R) -> Result<String> {
    let mut buf = Vec::new();
    let read = input.read_until(b'\n', &mut buf)?;
    if read == 0 {
        tracing::debug!("No carrier key on stdin, defaulting to {}", DEFAULT_CARRIER_KEY);
        return Ok(DEFAULT_CARRIER_KEY.to_string());
    }
    let line = String::from_utf8_lossy(&buf);
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CarrierKind, Decoration, ReportKind};
    use std::io::Cursor;

    struct TestConfig {
        decorations: Vec<Decoration>,
        carrier: Option<String>,
    }

    impl ConfigProvider for TestConfig {
        fn locale(&self) -> Locale {
            Locale::En
        }

        fn report_kind(&self) -> ReportKind {
            ReportKind::Sales
        }

        fn decorations(&self) -> &[Decoration] {
            &self.decorations
        }

        fn order_id(&self) -> &str {
            "12345"
        }

        fn carrier(&self) -> Option<&str> {
            self.carrier.as_deref()
        }
    }

    #[test]
    fn test_empty_input_defaults_to_internal() {
        let showcase = Showcase::new(TestConfig {
            decorations: vec![],
            carrier: None,
        });
        let mut out = Vec::new();
        let summary = showcase.run(Cursor::new(""), &mut out).unwrap();

        assert_eq!(summary.carrier, CarrierKind::Internal);
        assert_eq!(summary.report, "Sales report: item A - 1000 KZT, item B - 500 KZT.");
    }

    #[test]
    fn test_preset_carrier_skips_prompt() {
        let showcase = Showcase::new(TestConfig {
            decorations: vec![],
            carrier: Some("kazpost".to_string()),
        });
        let mut out = Vec::new();
        let summary = showcase.run(Cursor::new("yandex\n"), &mut out).unwrap();
        let printed = String::from_utf8(out).unwrap();

        assert_eq!(summary.carrier, CarrierKind::Kazpost);
        assert!(!printed.contains("Choose a delivery service"));
    }

    #[test]
    fn test_invalid_utf8_line_is_decoded_lossily() {
        let mut input = Cursor::new(vec![0xff, b'y', b'\n']);
        assert_eq!(read_carrier_key(&mut input).unwrap(), "\u{fffd}y");
    }

    #[test]
    fn test_crlf_line_is_trimmed() {
        let mut input = Cursor::new("YANDEX\r\n");
        assert_eq!(read_carrier_key(&mut input).unwrap(), "YANDEX");
    }
}
