//! Behavior tests for the Zonerich vendor profile.
//!
//! Every test runs against a buffer connection, so the exact byte sequences and the number
//! of writes reaching the transport can be checked.

use pretty_assertions::assert_eq;
use zonerich_escpos::{
    ZonerichPrinter, PrinterProfile, DrawerPin, Error,
    command::{BarcodeOptions, TextFormat, Justification}
};

const ALIGN_LEFT: [u8; 3] = [0x1b, 0x61, 0x00];

fn buffer_printer() -> ZonerichPrinter {
    ZonerichPrinter::new(PrinterProfile::buffer_builder().build())
        .unwrap()
        .unwrap()
}

#[test]
fn barcode_frames_code_with_length_byte() {
    for (system, code, command) in vec![
        ("EAN13", "4006381333931", vec![0x1d, 0x6b, 0x43]),
        ("EAN8", "96385074", vec![0x1d, 0x6b, 0x44]),
        ("CODE39", "HELLO-123", vec![0x1d, 0x6b, 0x45]),
        ("CODE128", "No. 12345678", vec![0x1d, 0x6b, 0x49])
    ] {
        let printer = buffer_printer();
        printer.barcode(code, system, BarcodeOptions::default()).unwrap();

        let writes = printer.captured().unwrap();
        assert_eq!(writes.len(), 1, "barcode must reach the transport as one write");
        let mut expected = ALIGN_LEFT.to_vec();
        expected.extend_from_slice(&command);
        expected.push(code.len() as u8);
        expected.extend_from_slice(code.as_bytes());
        assert_eq!(writes[0], expected);
    }
}

#[test]
fn barcode_symbology_is_case_insensitive() {
    let printer = buffer_printer();
    printer.barcode("96385074", "ean8", BarcodeOptions::default()).unwrap();
    assert_eq!(printer.captured().unwrap().len(), 1);
}

#[test]
fn ean13_length_bounds() {
    for (code, valid) in [
        ("40063813339", false),   // 11
        ("400638133393", true),   // 12
        ("4006381333931", true),  // 13
        ("40063813339312", false) // 14
    ] {
        let printer = buffer_printer();
        let result = printer.barcode(code, "EAN13", BarcodeOptions::default());
        if valid {
            result.unwrap();
        } else {
            assert!(matches!(result, Err(Error::BarcodeCode(_))), "EAN13 of length {} must be rejected", code.len());
            assert!(printer.captured().unwrap().is_empty(), "nothing may be transmitted on failure");
        }
    }
}

#[test]
fn ean8_length_bounds() {
    for (code, valid) in [
        ("963850", false),   // 6
        ("9638507", true),   // 7
        ("96385074", true),  // 8
        ("963850741", false) // 9
    ] {
        let printer = buffer_printer();
        let result = printer.barcode(code, "EAN8", BarcodeOptions::default());
        if valid {
            result.unwrap();
        } else {
            assert!(matches!(result, Err(Error::BarcodeCode(_))), "EAN8 of length {} must be rejected", code.len());
            assert!(printer.captured().unwrap().is_empty());
        }
    }
}

#[test]
fn code128_needs_at_least_two_characters() {
    let printer = buffer_printer();
    assert!(matches!(
        printer.barcode("A", "CODE128", BarcodeOptions::default()),
        Err(Error::BarcodeCode(_))
    ));
    printer.barcode("AB", "CODE128", BarcodeOptions::default()).unwrap();
}

#[test]
fn unknown_symbology_is_rejected() {
    let printer = buffer_printer();
    // The code itself would be a fine EAN13, the symbology alone must cause the failure
    assert!(matches!(
        printer.barcode("4006381333931", "QRCODE", BarcodeOptions::default()),
        Err(Error::BarcodeType(_))
    ));
    assert!(printer.captured().unwrap().is_empty());
}

#[test]
fn empty_code_is_rejected() {
    let printer = buffer_printer();
    assert!(matches!(
        printer.barcode("", "CODE39", BarcodeOptions::default()),
        Err(Error::BarcodeCode(_))
    ));
    assert!(printer.captured().unwrap().is_empty());
}

#[test]
fn barcode_width_out_of_range() {
    // The original Zonerich driver had an always-true range check here; the strict [2, 6]
    // bound is enforced on purpose
    for width in [0, 1, 7, 255] {
        let printer = buffer_printer();
        let options = BarcodeOptions { width: Some(width), ..Default::default() };
        assert!(matches!(
            printer.barcode("4006381333931", "EAN13", options),
            Err(Error::BarcodeSize(_))
        ), "width {} must be rejected", width);
        assert!(printer.captured().unwrap().is_empty());
    }
}

#[test]
fn barcode_height_out_of_range() {
    let printer = buffer_printer();
    let options = BarcodeOptions { height: Some(0), ..Default::default() };
    assert!(matches!(
        printer.barcode("4006381333931", "EAN13", options),
        Err(Error::BarcodeSize(_))
    ));
    assert!(printer.captured().unwrap().is_empty());
}

#[test]
fn barcode_width_and_height_are_encoded_before_the_symbology() {
    let printer = buffer_printer();
    let options = BarcodeOptions { width: Some(3), height: Some(64) };
    printer.barcode("9638507", "EAN8", options).unwrap();

    let writes = printer.captured().unwrap();
    assert_eq!(writes.len(), 1);
    let mut expected = ALIGN_LEFT.to_vec();
    expected.extend_from_slice(&[0x1d, 0x77, 0x03]); // barcode width 3
    expected.extend_from_slice(&[0x1d, 0x68, 0x40]); // barcode height 64
    expected.extend_from_slice(&[0x1d, 0x6b, 0x44]); // EAN8
    expected.push(0x07);
    expected.extend_from_slice(b"9638507");
    assert_eq!(writes[0], expected);
}

#[test]
fn page_batches_margin_and_width_in_one_write() {
    let printer = buffer_printer();
    printer.page(Some((1, 0)), Some((80, 0))).unwrap();

    let writes = printer.captured().unwrap();
    assert_eq!(writes.len(), 1);
    assert_eq!(writes[0], vec![
        0x1d, 0x4c, 0x01, 0x00, // left margin 1
        0x1d, 0x57, 0x50, 0x00  // print width 80
    ]);
}

#[test]
fn page_margin_alone() {
    let printer = buffer_printer();
    printer.page(Some((2, 1)), None).unwrap();
    assert_eq!(printer.captured().unwrap(), vec![vec![0x1d, 0x4c, 0x02, 0x01]]);
}

#[test]
fn page_without_arguments_transmits_nothing() {
    let printer = buffer_printer();
    printer.page(None, None).unwrap();
    assert!(printer.captured().unwrap().is_empty());
}

#[test]
fn page_rejects_zero_margin_low_byte() {
    let printer = buffer_printer();
    assert!(matches!(printer.page(Some((0, 0)), None), Err(Error::InvalidValue(_))));
    assert!(printer.captured().unwrap().is_empty());
}

#[test]
fn hw_select_and_reset_are_rejected() {
    let printer = buffer_printer();
    for action in ["SELECT", "RESET", "select", "Reset", ""] {
        assert!(matches!(printer.hw(action), Err(Error::Unsupported(_))), "hw({:?}) must fail", action);
    }
    assert!(printer.captured().unwrap().is_empty());
}

#[test]
fn hw_init_delegates_to_the_base_behavior() {
    let printer = buffer_printer();
    printer.hw("INIT").unwrap();
    assert_eq!(printer.captured().unwrap(), vec![vec![0x1b, 0x40]]);
}

#[test]
fn hw_unknown_action_is_a_no_op_after_delegation() {
    let printer = buffer_printer();
    printer.hw("FEED").unwrap();
    assert!(printer.captured().unwrap().is_empty());
}

#[test]
fn control_ff_and_vt_are_rejected() {
    let printer = buffer_printer();
    for code in ["FF", "VT", "ff", "vt", ""] {
        assert!(matches!(printer.control(code), Err(Error::Unsupported(_))), "control({:?}) must fail", code);
    }
    assert!(printer.captured().unwrap().is_empty());
}

#[test]
fn control_lf_delegates_to_the_base_behavior() {
    let printer = buffer_printer();
    printer.control("LF").unwrap();
    printer.control("cr").unwrap();
    assert_eq!(printer.captured().unwrap(), vec![vec![0x0a], vec![0x0d]]);
}

#[test]
fn set_forwards_unchanged_to_the_base_behavior() {
    let printer = buffer_printer();
    printer.set(&TextFormat {
        bold: true,
        justification: Justification::Center,
        ..Default::default()
    }).unwrap();

    let writes = printer.captured().unwrap();
    assert_eq!(writes.len(), 1);
    assert_eq!(writes[0], vec![
        0x1b, 0x21, 0x00, // normal size
        0x1b, 0x2d, 0x00, // underline off
        0x1b, 0x45, 0x01, // bold on
        0x1b, 0x21, 0x00, // font A
        0x1b, 0x61, 0x01  // align center
    ]);
}

#[test]
fn status_succeeds_without_transmitting() {
    let printer = buffer_printer();
    printer.status().unwrap();
    assert!(printer.captured().unwrap().is_empty());
}

#[test]
fn cut_and_drawer_constants() {
    let printer = buffer_printer();
    printer.cut().unwrap();
    printer.partial_cut().unwrap();
    printer.cash_drawer(DrawerPin::Pin2).unwrap();
    printer.cash_drawer(DrawerPin::Pin5).unwrap();
    assert_eq!(printer.captured().unwrap(), vec![
        vec![0x1d, 0x56, 0x00],
        vec![0x1d, 0x56, 0x01],
        vec![0x1b, 0x70, 0x00, 0x05, 0x05],
        vec![0x1b, 0x70, 0x01, 0x05, 0x05]
    ]);
}

#[test]
fn print_encodes_to_cp437() {
    let printer = buffer_printer();
    printer.println("Hola!").unwrap();
    assert_eq!(printer.captured().unwrap(), vec![b"Hola!\n".to_vec()]);
}
