// SPDX-License-Identifier: Apache-2.0

use tilestitch::*;

fn emit(variant: Variant, count: i64) -> String {
    let top = build_chain(count, &variant.chain_config(None)).unwrap();
    VerilogEmitter::default().render(&top).unwrap()
}

#[test]
fn test_array_of_two() {
    assert_eq!(
        emit(Variant::Array, 2),
        "\
module veerwolf_array #(
  parameter array_code = \"bootloader.vh\"
) (
  input wire clk_core,
  input wire rst_core,
  input wire i_uart_rx,
  output wire o_uart_tx,
  input wire [15:0] i_sw,
  output wire [15:0] o_led
);
  wire [15:0] gpio0;
  wire uart0;
  wire [15:0] gpio1;
  wire uart1;
  wire [15:0] gpio2;
  wire uart2;
  assign gpio0 = i_sw;
  assign o_led = gpio2;
  assign uart0 = i_uart_rx;
  assign o_uart_tx = uart2;
  veerwolf_tile #(
    .bootrom_file(array_code)
  ) tile0 (
    .clk_core(clk_core),
    .rst_core(rst_core),
    .i_uart_rx(uart0),
    .o_uart_tx(uart1),
    .i_sw(gpio0),
    .o_led(gpio1)
  );
  veerwolf_tile #(
    .bootrom_file(array_code)
  ) tile1 (
    .clk_core(clk_core),
    .rst_core(rst_core),
    .i_uart_rx(uart1),
    .o_uart_tx(uart2),
    .i_sw(gpio1),
    .o_led(gpio2)
  );
endmodule
"
    );
}

#[test]
fn test_empty_pack() {
    assert_eq!(
        emit(Variant::Pack, 0),
        "\
module veerwolf_pack #(
  parameter pack_code = \"bootloader.vh\"
) (
  input wire clk_core,
  input wire rst_core,
  input wire i_uart_rx,
  output wire o_uart_tx,
  input wire [15:0] i_sw,
  output wire [15:0] o_led
);
  wire [15:0] gpio0;
  wire uart0;
  assign gpio0 = i_sw;
  assign o_led = gpio0;
  assign uart0 = i_uart_rx;
  assign o_uart_tx = uart0;
endmodule
"
    );
}

#[test]
fn test_idempotent() {
    for count in [0, 1, 5] {
        assert_eq!(emit(Variant::Array, count), emit(Variant::Array, count));
        assert_eq!(emit(Variant::Pack, count), emit(Variant::Pack, count));
    }
}

#[test]
fn test_variants_differ_only_in_names() {
    for count in [0, 1, 3, 8] {
        let pack = emit(Variant::Pack, count)
            .replace("veerwolf_pack", "veerwolf_array")
            .replace("pack_code", "array_code");
        assert_eq!(pack, emit(Variant::Array, count));
    }
}

#[test]
fn test_custom_boot_image() {
    let top = build_chain(1, &Variant::Array.chain_config(Some("hello.vh"))).unwrap();
    let text = top.emit(true).unwrap();
    assert!(text.contains("  parameter array_code = \"hello.vh\"\n"));
    assert!(text.contains("    .bootrom_file(array_code)\n"));
}
