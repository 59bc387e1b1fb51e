use crate::domain::model::{Decoration, Locale, ReportKind};
use crate::domain::ports::Report;

#[derive(Debug, Clone, Copy, Default)]
pub struct SalesReport {
    locale: Locale,
}

impl SalesReport {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }
}

impl Report for SalesReport {
    fn generate(&self) -> String {
        match self.locale {
            Locale::En => "Sales report: item A - 1000 KZT, item B - 500 KZT.",
            Locale::Ru => "Отчёт по продажам: товар A - 1000тг, товар B - 500тг.",
        }
        .to_string()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct UserReport {
    locale: Locale,
}

impl UserReport {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }
}

impl Report for UserReport {
    fn generate(&self) -> String {
        match self.locale {
            Locale::En => "User report: Ilya, Katya, Sasha.",
            Locale::Ru => "Отчёт по пользователям: Илья, Катя, Саша.",
        }
        .to_string()
    }
}

impl Decoration {
    /// The line this decoration appends to the report it wraps.
    pub fn suffix(&self, locale: Locale) -> &'static str {
        match (self, locale) {
            (Decoration::DateFilter, Locale::En) => "Filter: last 7 days.",
            (Decoration::DateFilter, Locale::Ru) => "Фильтр: последние 7 дней.",
            (Decoration::Sorting, Locale::En) => "Sorting: by date.",
            (Decoration::Sorting, Locale::Ru) => "Сортировка: по дате.",
            (Decoration::WordExport, Locale::En) => "Export: Word document created (.docx).",
            (Decoration::WordExport, Locale::Ru) => "Экспорт: создан документ Word (.docx).",
            (Decoration::PdfExport, Locale::En) => "Export: PDF file created.",
            (Decoration::PdfExport, Locale::Ru) => "Экспорт: создан PDF файл.",
        }
    }
}

/// A report wrapped by one decoration. Output is always the wrapped
/// report's text, a newline, then this decoration's suffix.
#[derive(Debug, Clone)]
pub struct Decorated<R> {
    inner: R,
    decoration: Decoration,
    locale: Locale,
}

impl<R: Report> Decorated<R> {
    pub fn new(inner: R, decoration: Decoration, locale: Locale) -> Self {
        Self {
            inner,
            decoration,
            locale,
        }
    }

    pub fn decoration(&self) -> Decoration {
        self.decoration
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Report> Report for Decorated<R> {
    fn generate(&self) -> String {
        let mut text = self.inner.generate();
        text.push('\n');
        text.push_str(self.decoration.suffix(self.locale));
        text
    }
}

/// Explicit nesting: `SalesReport::new(locale).decorate(Decoration::Sorting, locale)`.
pub trait ReportExt: Report + Sized {
    fn decorate(self, decoration: Decoration, locale: Locale) -> Decorated<Self> {
        Decorated::new(self, decoration, locale)
    }
}

impl<R: Report> ReportExt for R {}

pub fn base_report(kind: ReportKind, locale: Locale) -> Box<dyn Report> {
    match kind {
        ReportKind::Sales => Box::new(SalesReport::new(locale)),
        ReportKind::User => Box::new(UserReport::new(locale)),
    }
}

/// Wraps the base report with each decoration in slice order, so the first
/// entry ends up innermost and its suffix is printed first.
pub fn compose(kind: ReportKind, decorations: &[Decoration], locale: Locale) -> Box<dyn Report> {
    let report = decorations
        .iter()
        .fold(base_report(kind, locale), |report, &decoration| {
            Box::new(report.decorate(decoration, locale)) as Box<dyn Report>
        });
    tracing::debug!(
        "Composed {:?} report with {} decoration(s): {:?}",
        kind,
        decorations.len(),
        decorations
    );
    report
}
