//! # Interface Segregation
//!
//! Printing and scanning are two separate contracts. A device may offer both
//! ([`AllInOnePrinter`]), but a consumer asks for only the one it needs:
//! [`print_document`] takes a `&dyn Printer` and cannot see scanning at all.

use std::io::Write;

use tracing::{debug, instrument};

use crate::error::Result;

pub trait Printer {
    fn print(&self, out: &mut dyn Write) -> Result<()>;
}

pub trait Scanner {
    fn scan(&self, out: &mut dyn Write) -> Result<()>;
}

/// A device that satisfies both contracts.
#[derive(Debug, Clone, Copy, Default)]
pub struct AllInOnePrinter;

impl Printer for AllInOnePrinter {
    fn print(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Printing")?;
        Ok(())
    }
}

impl Scanner for AllInOnePrinter {
    fn scan(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Scanning")?;
        Ok(())
    }
}

/// Print-only device. Never forced to stub out a `scan`.
#[derive(Debug, Clone, Copy, Default)]
pub struct InkjetPrinter;

impl Printer for InkjetPrinter {
    fn print(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Printing on inkjet")?;
        Ok(())
    }
}

/// Scan-only device.
#[derive(Debug, Clone, Copy, Default)]
pub struct FlatbedScanner;

impl Scanner for FlatbedScanner {
    fn scan(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Scanning on flatbed")?;
        Ok(())
    }
}

#[instrument(skip_all)]
pub fn print_document(printer: &dyn Printer, out: &mut dyn Write) -> Result<()> {
    debug!("Sending print job");
    printer.print(out)
}

#[instrument(skip_all)]
pub fn scan_document(scanner: &dyn Scanner, out: &mut dyn Write) -> Result<()> {
    debug!("Sending scan job");
    scanner.scan(out)
}

/// Hands one all-in-one device to both narrow consumers.
pub fn demo(out: &mut dyn Write) -> Result<()> {
    debug!("isp demo");
    let device = AllInOnePrinter;
    print_document(&device, out)?;
    scan_document(&device, out)
}
