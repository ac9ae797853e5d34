/*!
# `PRINT [<expression>[, <expression>...]]`

## Purpose
Output numbers to the terminal for the operator.

## Remarks
A `PRINT` by itself outputs a newline.
Values are separated by one space and followed by a newline.
Up to 15 significant digits are shown.

## Example
```text
PRINT 1, 2/3, 1E20
1 0.666666666666667 1e+20
```

*/
