/*!
# `RUN`

## Purpose
Start the program from its first line.

## Remarks
Active `FOR` loops and `GOSUB` returns are forgotten.
Variables are kept from before the run.
The first error stops the program and is reported with its line number.

## Example
```text
10 PRINT 1/0
RUN
DIVISION BY ZERO IN 10 (7..8)
```

*/
